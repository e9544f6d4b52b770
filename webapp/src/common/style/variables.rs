// light values live on .theme-light, the dark overrides on .theme-dark; the app root
// carries exactly one of the two classes
pub const CSS_VARIABLES: &str = r#"
.app {
  /* Brand */
  --primary: #6366F1;
  --primary-light: #818CF8;
  --primary-dark: #4F46E5;
  --secondary: #EC4899;
  --accent: #F59E0B;
  --gradient: linear-gradient(135deg, var(--primary) 0%, var(--secondary) 100%);

  /* Semantic */
  --success: #10B981;
  --warning: #F59E0B;
  --error: #EF4444;
  --info: #3B82F6;

  /* Layout */
  --nav-height: 80px;
  --container-width: 1200px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Radius */
  --radius-md: 12px;
  --radius-lg: 20px;
  --radius-full: 9999px;

  /* Motion */
  --transition-fast: 150ms ease;
  --transition: 300ms ease;
  --transition-slow: 800ms cubic-bezier(0.16, 1, 0.3, 1);

  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
  transition: background-color var(--transition), color var(--transition);
}

.theme-light {
  --background: #FFFFFF;
  --background-alt: #F8FAFC;
  --surface: #FFFFFF;
  --surface-raised: #F1F5F9;
  --text-primary: #0F172A;
  --text-secondary: #475569;
  --text-tertiary: #94A3B8;
  --border: #E2E8F0;
  --nav-background: rgba(255, 255, 255, 0.85);
  --overlay: rgba(15, 23, 42, 0.6);
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
}

.theme-dark {
  --background: #0B1120;
  --background-alt: #111827;
  --surface: #1F2937;
  --surface-raised: #273449;
  --text-primary: #F8FAFC;
  --text-secondary: #CBD5E1;
  --text-tertiary: #64748B;
  --border: #334155;
  --nav-background: rgba(17, 24, 39, 0.85);
  --overlay: rgba(0, 0, 0, 0.7);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}
"#;
