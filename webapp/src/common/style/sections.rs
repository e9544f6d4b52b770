pub const SECTION_STYLES: &str = r#"
/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  color: #FFFFFF;
  background: linear-gradient(135deg, #312E81 0%, #4338CA 45%, #831843 100%);
}

.particles {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.particle {
  position: absolute;
  border-radius: var(--radius-full);
  background-color: rgba(255, 255, 255, 0.25);
  animation: float 5s ease-in-out infinite;
}

@keyframes float {
  0%, 100% { transform: translateY(0); opacity: 0.3; }
  50% { transform: translateY(-30px); opacity: 0.8; }
}

.hero-content {
  position: relative;
  z-index: 1;
  max-width: 820px;
  margin: 0 auto;
  text-align: center;
}

.hero-greeting {
  font-size: 1.25rem;
  opacity: 0.85;
}

.hero-name {
  font-size: clamp(2.75rem, 7vw, 5rem);
  font-weight: 800;
  line-height: 1.1;
  margin: var(--space-4) 0;
}

.hero-headline {
  min-height: 2.5rem;
  font-size: clamp(1.5rem, 3vw, 2rem);
  font-weight: 600;
  color: #FDE68A;
}

.hero-headline .cursor {
  display: inline-block;
  margin-left: 2px;
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-tagline {
  margin: var(--space-6) auto var(--space-8);
  max-width: 620px;
  font-size: 1.125rem;
  opacity: 0.85;
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  flex-wrap: wrap;
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  color: #FFFFFF;
  opacity: 0.8;
  font-size: 1.5rem;
  animation: float 2s ease-in-out infinite;
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: start;
}

.about-photo {
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow);
}

.about-text p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-4);
  margin: var(--space-8) 0;
}

.stat {
  text-align: center;
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--surface-raised);
}

.stat-value {
  font-size: 2rem;
  font-weight: 800;
}

.stat-label {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.skill {
  margin-bottom: var(--space-4);
}

.skill-header {
  display: flex;
  justify-content: space-between;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.skill-track {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  overflow: hidden;
}

.skill-bar {
  height: 100%;
  border-radius: var(--radius-full);
  background: var(--gradient);
  transition: width 1.5s ease-out;
}

/* Services */
.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: var(--space-6);
}

.service-icon {
  width: 56px;
  height: 56px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-md);
  background: var(--gradient);
  color: #FFFFFF;
  font-size: 1.5rem;
  margin-bottom: var(--space-6);
}

.service-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
}

.service-description {
  color: var(--text-secondary);
}

.call-to-action {
  margin-top: var(--space-16);
  text-align: center;
}

.call-to-action h3 {
  font-size: 1.5rem;
  margin-bottom: var(--space-2);
}

.call-to-action p {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.call-to-action .actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}

/* Experience */
.timeline {
  position: relative;
  max-width: 1000px;
  margin: 0 auto;
}

.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 2px;
  background: var(--gradient);
}

.timeline-item {
  position: relative;
  width: 50%;
  padding: var(--space-4) var(--space-8);
}

.timeline-item.left {
  left: 0;
  text-align: right;
}

.timeline-item.right {
  left: 50%;
}

.timeline-item::after {
  content: "";
  position: absolute;
  top: var(--space-8);
  width: 16px;
  height: 16px;
  border-radius: var(--radius-full);
  background: var(--gradient);
}

.timeline-item.left::after { right: -8px; }
.timeline-item.right::after { left: -8px; }

.timeline-year {
  display: inline-block;
  margin-bottom: var(--space-3);
}

.timeline-title {
  font-size: 1.2rem;
  font-weight: 700;
}

.timeline-company {
  color: var(--primary);
  font-weight: 600;
  margin-bottom: var(--space-3);
}

.timeline-description {
  color: var(--text-secondary);
}

@media (max-width: 768px) {
  .about-grid {
    grid-template-columns: 1fr;
  }

  .timeline::before {
    left: 8px;
  }

  .timeline-item,
  .timeline-item.left,
  .timeline-item.right {
    width: 100%;
    left: 0;
    text-align: left;
    padding-left: var(--space-12);
  }

  .timeline-item.left::after,
  .timeline-item.right::after {
    left: 0;
    right: auto;
  }
}

/* Portfolio */
.filter-bar {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-bottom: var(--space-12);
}

.filter-button {
  padding: var(--space-2) var(--space-6);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-secondary);
  font-weight: 600;
  transition: background-color var(--transition-fast), color var(--transition-fast);
}

.filter-button.active {
  background: var(--gradient);
  color: #FFFFFF;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-8);
}

.project-card {
  padding: 0;
  overflow: hidden;
  cursor: pointer;
}

.project-image {
  width: 100%;
  height: 220px;
  object-fit: cover;
}

.project-body {
  padding: var(--space-6);
}

.project-meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-3);
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.project-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.project-description {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.project-detail-image {
  width: 100%;
  max-height: 360px;
  object-fit: cover;
  border-radius: var(--radius-md);
  margin-bottom: var(--space-6);
}

.detail-heading {
  font-size: 1.1rem;
  font-weight: 700;
  margin: var(--space-6) 0 var(--space-3);
}

.feature-list {
  list-style: none;
  display: grid;
  gap: var(--space-2);
}

.feature-list li::before {
  content: "\2713";
  margin-right: var(--space-2);
  color: var(--success);
}

.empty-state {
  text-align: center;
  color: var(--text-tertiary);
}

/* Contact */
.contact {
  color: #FFFFFF;
  background: linear-gradient(135deg, #312E81 0%, #3730A3 50%, #831843 100%);
}

.contact .section-lead {
  color: rgba(255, 255, 255, 0.8);
}

.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-16);
  align-items: start;
}

.glass {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  border: 1px solid rgba(255, 255, 255, 0.2);
  background-color: rgba(255, 255, 255, 0.08);
  backdrop-filter: blur(16px);
}

.contact-info {
  display: flex;
  gap: var(--space-6);
  margin-bottom: var(--space-6);
}

.contact-icon {
  flex-shrink: 0;
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-md);
  background: var(--gradient);
}

.contact-info-title {
  font-weight: 600;
}

.contact-info-note {
  opacity: 0.6;
  font-size: 0.875rem;
}

.social-links {
  display: flex;
  gap: var(--space-4);
}

.social-link {
  width: 44px;
  height: 44px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-md);
  border: 1px solid rgba(255, 255, 255, 0.2);
  background-color: rgba(255, 255, 255, 0.1);
  color: #FFFFFF;
  transition: transform var(--transition-fast);
}

.social-link:hover {
  transform: translateY(-2px);
}

@media (max-width: 1024px) {
  .contact-grid {
    grid-template-columns: 1fr;
  }
}

/* Footer */
.site-footer {
  padding: var(--space-16) 0 var(--space-8);
  background-color: #0B1120;
  color: #CBD5E1;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-12);
  margin-bottom: var(--space-12);
}

.footer-heading {
  color: #FFFFFF;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.footer-links {
  list-style: none;
  display: grid;
  gap: var(--space-2);
}

.footer-links button:hover {
  color: #FFFFFF;
}

.footer-bottom {
  padding-top: var(--space-8);
  border-top: 1px solid #1F2937;
  text-align: center;
  font-size: 0.875rem;
}

.back-to-top {
  position: fixed;
  right: var(--space-8);
  bottom: var(--space-8);
  z-index: 40;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  background: var(--gradient);
  color: #FFFFFF;
  box-shadow: var(--shadow);
}

@media (max-width: 768px) {
  .footer-grid {
    grid-template-columns: 1fr;
  }
}

/* Not found */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-6);
  text-align: center;
}

.not-found-code {
  font-size: 6rem;
  font-weight: 800;
}
"#;
