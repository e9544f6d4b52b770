pub const BASE_COMPONENTS: &str = r#"
/* Layout */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.page-section {
  padding: var(--space-24) 0;
}

.page-section.alt {
  background-color: var(--background-alt);
}

.section-header {
  text-align: center;
  max-width: 720px;
  margin: 0 auto var(--space-12);
}

.section-badge {
  display: inline-block;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.section-title {
  font-size: clamp(2rem, 4vw, 3rem);
  font-weight: 800;
  line-height: 1.2;
  margin-bottom: var(--space-4);
}

.section-lead {
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.gradient-text {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Entrance animations, played once per section */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.reveal.revealed {
  opacity: 1;
  transform: none;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.btn:hover {
  transform: translateY(-2px);
  text-decoration: none;
}

.btn:disabled {
  opacity: 0.7;
  cursor: not-allowed;
  transform: none;
}

.btn-primary {
  background: var(--gradient);
  color: #FFFFFF;
  box-shadow: 0 8px 20px rgba(99, 102, 241, 0.35);
}

.btn-secondary {
  border: 2px solid var(--primary);
  color: var(--primary);
}

.btn-ghost {
  border: 2px solid rgba(255, 255, 255, 0.6);
  color: #FFFFFF;
}

.btn-block {
  width: 100%;
}

/* Navigation */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  transition: background-color var(--transition), box-shadow var(--transition);
}

.site-nav.sticky {
  background-color: var(--nav-background);
  backdrop-filter: blur(16px);
  box-shadow: var(--shadow);
}

.nav-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: 1.75rem;
  font-weight: 800;
}

.site-nav:not(.sticky) .nav-link,
.site-nav:not(.sticky) .menu-button span {
  color: #FFFFFF;
}

.nav-links {
  display: flex;
  gap: var(--space-8);
}

.nav-link {
  position: relative;
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link::after {
  content: "";
  position: absolute;
  left: 0;
  bottom: -6px;
  width: 0;
  height: 2px;
  background: var(--gradient);
  transition: width var(--transition);
}

.nav-link:hover::after,
.nav-link.active::after {
  width: 100%;
}

.nav-link.active {
  color: var(--primary);
}

.nav-controls {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.theme-toggle {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  transition: transform var(--transition-fast);
}

.theme-toggle:hover {
  transform: scale(1.1);
}

.menu-button {
  display: none;
  flex-direction: column;
  gap: 5px;
}

.menu-button span {
  display: block;
  width: 24px;
  height: 2px;
  background-color: currentColor;
  transition: transform var(--transition), opacity var(--transition);
}

.menu-button.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.menu-button.open span:nth-child(2) { opacity: 0; }
.menu-button.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.mobile-menu {
  position: fixed;
  inset: var(--nav-height) 0 0 0;
  z-index: 40;
  background-color: var(--overlay);
}

.mobile-menu-panel {
  margin: var(--space-4);
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow);
}

.mobile-menu-panel .nav-link {
  display: block;
  width: 100%;
  text-align: left;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
}

.mobile-menu-panel .nav-link.active {
  background-color: var(--surface-raised);
}

@media (max-width: 1024px) {
  .nav-links,
  .nav-controls .btn {
    display: none;
  }

  .menu-button {
    display: flex;
  }
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
  box-shadow: var(--shadow);
  transition: transform var(--transition), box-shadow var(--transition);
}

.card:hover {
  transform: translateY(-6px);
}

/* Tags and badges */
.tag {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.status-badge {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.8rem;
  font-weight: 600;
}

.status-completed { background-color: rgba(16, 185, 129, 0.15); color: var(--success); }
.status-in-progress { background-color: rgba(59, 130, 246, 0.15); color: var(--info); }
.status-maintenance { background-color: rgba(245, 158, 11, 0.15); color: var(--warning); }

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: var(--overlay);
  backdrop-filter: blur(4px);
}

.modal-content {
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow);
  outline: none;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-6);
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.modal-body {
  padding: var(--space-6);
}

.modal-footer {
  display: flex;
  gap: var(--space-4);
  padding: var(--space-6);
  border-top: 1px solid var(--border);
}

.btn-close {
  width: 36px;
  height: 36px;
  border-radius: var(--radius-full);
  font-size: 1.5rem;
  line-height: 1;
  color: var(--text-secondary);
}

.btn-close:hover {
  background-color: var(--surface-raised);
}

/* Forms */
.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.form-field.wide {
  grid-column: 1 / -1;
}

.form-input {
  width: 100%;
  padding: var(--space-4) var(--space-6);
  border: 2px solid rgba(255, 255, 255, 0.2);
  border-radius: var(--radius-md);
  background-color: rgba(255, 255, 255, 0.08);
  color: #FFFFFF;
  font: inherit;
  resize: none;
  transition: border-color var(--transition-fast);
}

.form-input::placeholder {
  color: rgba(255, 255, 255, 0.6);
}

.form-input:focus {
  outline: none;
}

.form-input.focused {
  border-color: var(--primary-light);
}

.form-input.invalid {
  border-color: rgba(239, 68, 68, 0.7);
}

.field-error {
  color: #FCA5A5;
  font-size: 0.875rem;
}

.banner {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-4);
  margin-bottom: var(--space-6);
  border-radius: var(--radius-md);
  font-weight: 500;
}

.banner-success {
  background-color: rgba(16, 185, 129, 0.2);
  border: 1px solid rgba(52, 211, 153, 0.3);
  color: #6EE7B7;
}

.banner-error {
  background-color: rgba(239, 68, 68, 0.2);
  border: 1px solid rgba(248, 113, 113, 0.3);
  color: #FCA5A5;
}

.spinner {
  width: 18px;
  height: 18px;
  border: 2px solid rgba(255, 255, 255, 0.3);
  border-top-color: #FFFFFF;
  border-radius: var(--radius-full);
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@media (max-width: 768px) {
  .form-grid {
    grid-template-columns: 1fr;
  }
}
"#;
