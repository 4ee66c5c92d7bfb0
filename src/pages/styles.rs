use crate::config::{DRAWER_OFFSET_PX, ENTRANCE_DURATION_MS, ENTRANCE_OFFSET_PX};

const BASE_STYLES: &str = r#"
    :root {
        --primary: #2f7d32;
        --primary-strong: #1b5e20;
        --primary-foreground: #ffffff;
        --secondary: #00897b;
        --foreground: #1f2a1f;
        --muted: #5f6b5f;
        --border: #e3ebe3;
    }

    * {
        box-sizing: border-box;
    }

    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        color: var(--foreground);
        background: #ffffff;
    }

    .landing-page {
        min-height: 100vh;
    }

    .container {
        width: 100%;
        max-width: 56rem;
        margin: 0 auto;
        padding: 0 1rem;
    }

    .container--wide {
        max-width: 72rem;
    }

    .text-gradient {
        background: linear-gradient(135deg, var(--primary), var(--secondary));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    .muted {
        color: var(--muted);
    }

    .accent {
        color: var(--primary);
    }

    .badge {
        display: inline-block;
        margin-bottom: 1.5rem;
        padding: 0.35rem 0.9rem;
        border-radius: 999px;
        font-size: 0.85rem;
        font-weight: 600;
        color: var(--primary);
        background: rgba(47, 125, 50, 0.1);
        border: 1px solid rgba(47, 125, 50, 0.2);
    }

    .badge--solid {
        color: var(--primary-foreground);
        background: var(--primary);
    }

    /* Buttons */
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.6rem 1.2rem;
        border-radius: 0.5rem;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.2s ease, color 0.2s ease;
    }

    .btn--primary {
        color: var(--primary-foreground);
        background: var(--primary);
        border: 1px solid var(--primary);
    }

    .btn--primary:hover {
        background: var(--primary-strong);
    }

    .btn--outline {
        color: var(--foreground);
        background: transparent;
        border: 1px solid var(--border);
    }

    .btn--outline:hover {
        background: rgba(47, 125, 50, 0.06);
    }

    .btn--large {
        padding: 1.1rem 2rem;
        font-size: 1.125rem;
    }

    .btn--block {
        width: 100%;
    }

    /* Header */
    .site-header {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        padding: 1rem 0;
    }

    .site-header .container {
        max-width: 72rem;
    }

    .site-header__bar {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .site-header__logo {
        height: 2.5rem;
        width: auto;
    }

    .site-nav {
        display: none;
        align-items: center;
        gap: 2rem;
    }

    .site-nav__link,
    .mobile-drawer__link {
        color: var(--foreground);
        text-decoration: none;
        transition: color 0.2s ease;
    }

    .site-nav__link:hover,
    .mobile-drawer__link:hover {
        color: var(--primary);
    }

    .menu-toggle {
        display: inline-flex;
        padding: 0.25rem;
        border: none;
        background: none;
        color: var(--foreground);
        cursor: pointer;
    }

    .mobile-drawer {
        margin-top: 1rem;
        padding: 1rem 0;
        border-top: 1px solid var(--border);
    }

    .mobile-drawer__list {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .mobile-drawer__cta {
        width: fit-content;
    }

    @media (min-width: 768px) {
        .site-nav {
            display: flex;
        }

        .menu-toggle,
        .mobile-drawer {
            display: none;
        }
    }

    /* Hero */
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding: 6rem 0 4rem;
        background: radial-gradient(circle at top left, rgba(47, 125, 50, 0.12), transparent 55%),
            radial-gradient(circle at bottom right, rgba(0, 137, 123, 0.12), transparent 55%);
    }

    .hero__inner {
        text-align: center;
    }

    .hero__title {
        margin: 0 0 1.5rem;
        font-size: clamp(3rem, 7vw, 4.5rem);
        line-height: 1.1;
        font-weight: 800;
    }

    .hero__subtitle {
        max-width: 48rem;
        margin: 0 auto 2rem;
        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
        color: var(--muted);
    }

    .hero__actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }

    .hero__stats {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
        gap: 2rem;
        max-width: 48rem;
        margin: 4rem auto 0;
    }

    .stat__value {
        font-size: 2rem;
        font-weight: 700;
        color: var(--primary);
    }

    .stat__label {
        color: var(--muted);
    }

    /* Sections */
    .section {
        padding: 5rem 0;
    }

    .section--plain {
        background: #ffffff;
    }

    .section--tinted {
        background: linear-gradient(135deg, rgba(47, 125, 50, 0.05), rgba(0, 137, 123, 0.05));
    }

    .section--tinted-reverse {
        background: linear-gradient(135deg, rgba(0, 137, 123, 0.05), rgba(47, 125, 50, 0.05));
    }

    .section__heading {
        text-align: center;
        margin-bottom: 4rem;
    }

    .section__title {
        margin: 0 0 1.5rem;
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 800;
    }

    .section__intro {
        max-width: 48rem;
        margin: 0 auto;
        font-size: 1.25rem;
        color: var(--muted);
    }

    .subheading {
        margin: 0 0 1.5rem;
        font-size: 1.5rem;
        font-weight: 700;
        color: var(--primary);
    }

    .subheading--large {
        font-size: 1.875rem;
    }

    .subheading--centered {
        text-align: center;
        margin-bottom: 3rem;
    }

    .lead {
        font-size: 1.125rem;
        color: var(--muted);
        margin: 0 0 1.5rem;
    }

    .split {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        align-items: center;
    }

    .split--top {
        align-items: start;
    }

    @media (min-width: 1024px) {
        .split {
            grid-template-columns: 1fr 1fr;
        }
    }

    .pillars {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
        gap: 1rem;
    }

    .pillar {
        padding: 1rem;
        text-align: center;
        border-radius: 0.75rem;
        background: rgba(47, 125, 50, 0.05);
    }

    .pillar__label,
    .reason__title,
    .channel__label {
        font-weight: 600;
    }

    .panel {
        padding: 2rem;
        border-radius: 1rem;
    }

    .panel--tinted {
        background: linear-gradient(135deg, rgba(47, 125, 50, 0.1), rgba(0, 137, 123, 0.1));
    }

    .panel--roomy {
        padding: 3rem;
        border-radius: 1.5rem;
    }

    .reasons,
    .channels,
    .demo {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
    }

    .reason,
    .channel {
        display: flex;
        align-items: flex-start;
        gap: 0.9rem;
    }

    .reason__mark {
        margin-top: 0.2rem;
        flex-shrink: 0;
    }

    .showcase {
        margin-bottom: 3rem;
        padding: 3rem;
        border-radius: 1.5rem;
        background: #ffffff;
        box-shadow: 0 20px 40px rgba(31, 42, 31, 0.08);
    }

    .highlights {
        list-style: none;
        margin: 0;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .highlight {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .highlight__dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: var(--primary);
    }

    .spotlight {
        padding: 2rem;
        border-radius: 1rem;
        color: #ffffff;
        background: linear-gradient(135deg, var(--primary), var(--secondary));
    }

    .spotlight__title {
        margin: 1rem 0 0.5rem;
        font-size: 1.25rem;
    }

    .spotlight__body {
        margin: 0;
        opacity: 0.9;
    }

    /* Cards */
    .grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: 1fr;
    }

    @media (min-width: 768px) {
        .grid--two,
        .grid--four {
            grid-template-columns: repeat(2, 1fr);
        }
    }

    @media (min-width: 1024px) {
        .grid--four {
            grid-template-columns: repeat(4, 1fr);
        }
    }

    .card {
        padding: 1.5rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: #ffffff;
    }

    .card--full {
        height: 100%;
    }

    .card__header--inline {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .card__icon,
    .benefit__icon {
        margin-bottom: 1rem;
    }

    .card__title {
        margin: 0 0 0.75rem;
        font-size: 1.25rem;
    }

    .card__body {
        margin: 0;
        color: var(--muted);
    }

    .card--hover {
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }

    .card--hover:hover {
        transform: translateY(-4px);
        box-shadow: 0 16px 32px rgba(31, 42, 31, 0.1);
    }

    .benefit {
        padding: 2rem;
        text-align: center;
        border-radius: 1rem;
        background: #ffffff;
    }

    .benefit__title {
        margin: 0 0 0.5rem;
        font-size: 1.5rem;
        color: var(--primary);
    }

    .demo__note {
        margin: 0;
        font-size: 0.875rem;
        text-align: center;
        color: var(--muted);
    }

    /* Footer */
    .site-footer {
        padding: 3rem 0;
        color: var(--primary-foreground);
        background: var(--primary);
    }

    .site-footer .container {
        max-width: 72rem;
    }

    .site-footer__grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }

    @media (min-width: 768px) {
        .site-footer__grid {
            grid-template-columns: repeat(4, 1fr);
        }
    }

    .site-footer__logo {
        height: 2.5rem;
        width: auto;
        margin-bottom: 1rem;
        filter: brightness(0) invert(1);
    }

    .site-footer__heading {
        margin: 0 0 1rem;
        font-weight: 700;
    }

    .site-footer__list {
        list-style: none;
        margin: 0;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }

    .site-footer__muted,
    .site-footer__list {
        color: rgba(255, 255, 255, 0.8);
    }

    .site-footer__legal {
        margin-top: 2rem;
        padding-top: 2rem;
        text-align: center;
        border-top: 1px solid rgba(255, 255, 255, 0.2);
        color: rgba(255, 255, 255, 0.8);
    }
"#;

/// Header treatment, drawer and entrance transitions, driven by the timing constants.
fn motion_styles() -> String {
    format!(
        r#"
    .site-header {{
        transition: background 300ms ease, box-shadow 300ms ease, backdrop-filter 300ms ease;
    }}

    .site-header--transparent {{
        background: transparent;
    }}

    .site-header--elevated {{
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        -webkit-backdrop-filter: blur(12px);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
    }}

    .mobile-drawer {{
        animation: drawer-in {duration}ms ease-out;
    }}

    @keyframes drawer-in {{
        from {{ opacity: 0; transform: translateY(-{drawer}px); }}
        to {{ opacity: 1; transform: translateY(0); }}
    }}

    .reveal {{
        opacity: 0;
        transform: translateY({offset}px);
        transition-property: opacity, transform;
        transition-duration: {duration}ms;
        transition-timing-function: ease-out;
    }}

    .reveal--shown {{
        opacity: 1;
        transform: none;
    }}

    @media (prefers-reduced-motion: reduce) {{
        .reveal,
        .mobile-drawer {{
            transition: none;
            animation: none;
        }}
    }}
"#,
        duration = ENTRANCE_DURATION_MS,
        offset = ENTRANCE_OFFSET_PX,
        drawer = DRAWER_OFFSET_PX,
    )
}

pub fn stylesheet() -> String {
    let mut css = String::from(BASE_STYLES);
    css.push_str(&motion_styles());
    css
}
