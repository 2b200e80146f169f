/// Visual variants of the landing page. Only colours change; layout and
/// behaviour are shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Midnight,
    Daylight,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "midnight" | "dark" => Some(Variant::Midnight),
            "daylight" | "light" => Some(Variant::Daylight),
            _ => None,
        }
    }

    /// Root class; the stylesheet keys its custom properties off it.
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Midnight => "dmc-root theme-midnight",
            Variant::Daylight => "dmc-root theme-daylight",
        }
    }
}

pub const PAGE_CSS: &str = r#"
    .theme-midnight {
        --page-bg: #111;
        --card-bg: #fff;
        --text: #000;
        --muted: #4b5563;
        --accent: #2563eb;
        --accent-hover: #1d4ed8;
        --border: #e5e7eb;
        --footer-text: #6b7280;
    }
    .theme-daylight {
        --page-bg: #f3f4f6;
        --card-bg: #fff;
        --text: #111827;
        --muted: #4b5563;
        --accent: #0ea5e9;
        --accent-hover: #0284c7;
        --border: #d1d5db;
        --footer-text: #4b5563;
    }
    .dmc-root {
        min-height: 100vh;
        background: var(--page-bg);
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 0 1rem;
        font-family: system-ui, sans-serif;
        overflow-x: hidden;
    }
    .dmc-card {
        width: 100%;
        max-width: 36rem;
        background: var(--card-bg);
        color: var(--text);
        border: 1px solid var(--border);
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        padding: 2.5rem;
        margin-bottom: 4rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        animation: fadeInUp 1s cubic-bezier(0.4, 0, 0.2, 1);
    }
    .dmc-hero { margin-top: 5rem; align-items: center; text-align: center; }
    .dmc-hero h1 { font-size: 3rem; font-weight: 800; line-height: 1.1; margin: 0; }
    .dmc-brand { font-size: 1.5rem; font-weight: 800; display: flex; align-items: center; gap: 0.5rem; }
    .dmc-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: var(--accent); display: inline-block; }
    .dmc-muted { color: var(--muted); }
    .dmc-button {
        background: var(--accent);
        color: #fff;
        border: none;
        border-radius: 0.75rem;
        height: 3rem;
        padding: 0 2rem;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        transition: background 0.2s;
    }
    .dmc-button:hover { background: var(--accent-hover); }
    .dmc-button:disabled { opacity: 0.6; cursor: not-allowed; }
    .dmc-button.secondary { background: #fff; color: #000; border: 1px solid var(--border); }
    .dmc-button.pill { border-radius: 9999px; }
    .dmc-textarea {
        min-height: 100px;
        border: 1px solid var(--border);
        border-radius: 0.75rem;
        padding: 0.75rem;
        font-size: 1.125rem;
        color: var(--text);
        background: #fff;
    }
    .dmc-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .dmc-pill {
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid var(--border);
        background: #fff;
        color: #000;
        font-weight: 600;
        font-size: 0.875rem;
        cursor: pointer;
    }
    .dmc-pill.selected { background: #000; color: #fff; border-color: #000; }
    .dmc-output { background: #f3f4f6; border-radius: 0.75rem; padding: 1rem; white-space: pre-line; font-size: 1.125rem; animation: fadeIn 1s; }
    .dmc-spinner {
        display: inline-block;
        width: 1.25rem;
        height: 1.25rem;
        border-radius: 9999px;
        border: 2px solid #fff;
        border-top-color: transparent;
        animation: spin 1s linear infinite;
        margin-right: 0.5rem;
        vertical-align: middle;
    }
    .dmc-steps { display: flex; flex-direction: column; gap: 2rem; max-width: 48rem; width: 100%; margin-bottom: 4rem; }
    .dmc-step { display: flex; gap: 1.5rem; align-items: flex-start; background: var(--card-bg); color: var(--text); border-radius: 1rem; padding: 2rem; }
    .dmc-step-number {
        flex-shrink: 0;
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 9999px;
        background: var(--accent);
        color: #fff;
        font-size: 1.5rem;
        font-weight: 800;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .dmc-testimonials { display: flex; gap: 2rem; overflow-x: auto; padding-bottom: 0.5rem; }
    .dmc-testimonial { min-width: 260px; border: 1px solid var(--border); border-radius: 1rem; padding: 1.5rem; }
    .dmc-badge { display: inline-block; background: var(--accent); color: #fff; border-radius: 9999px; padding: 0.5rem 1rem; font-weight: 600; }
    .dmc-price { font-size: 2.25rem; font-weight: 800; }
    .dmc-sticky { position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); width: 90vw; max-width: 28rem; z-index: 50; }
    .dmc-sticky .dmc-button { width: 100%; height: 3.5rem; border-radius: 9999px; }
    .dmc-overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); display: flex; align-items: center; justify-content: center; z-index: 60; }
    .dmc-dialog { max-width: 24rem; background: #fff; color: #000; border-radius: 0.75rem; padding: 1.5rem; display: flex; flex-direction: column; gap: 0.5rem; }
    .dmc-footer { width: 100%; padding: 2rem 0; text-align: center; color: var(--footer-text); font-size: 0.875rem; border-top: 1px solid var(--border); margin-top: auto; }
    .dmc-footer a { color: inherit; }
    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fadeInUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: translateY(0); } }
    @keyframes spin { to { transform: rotate(360deg); } }
"#;
