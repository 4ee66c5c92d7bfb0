use yew::prelude::*;

use crate::components::button::CtaButton;
use crate::components::icon::{Icon, IconSvg};
use crate::content::{Brand, NavContent};
use crate::state::{HeaderTone, MenuState};

#[derive(Properties, PartialEq)]
pub struct HeaderBarProps {
    pub tone: HeaderTone,
    pub menu: MenuState,
    pub brand: Brand,
    pub nav: NavContent,
    pub on_toggle: Callback<MouseEvent>,
}

/// Fixed site header: logo, desktop navigation, the mobile menu toggle and,
/// while the menu is open, the mobile drawer.
#[function_component(HeaderBar)]
pub fn header_bar(props: &HeaderBarProps) -> Html {
    let HeaderBarProps {
        tone,
        menu,
        brand,
        nav,
        on_toggle,
    } = props;

    let toggle_icon = if menu.is_open() { Icon::Close } else { Icon::Menu };

    html! {
        <header class={classes!("site-header", tone.class())}>
            <div class="container">
                <div class="site-header__bar">
                    <div class="site-header__brand">
                        <img src={brand.logo.clone()} alt={brand.name.clone()} class="site-header__logo" />
                    </div>

                    <nav class="site-nav" aria-label="Primary">
                        {
                            nav.links.iter().map(|link| html! {
                                <a href={link.target.href()} class="site-nav__link">{ link.label.clone() }</a>
                            }).collect::<Html>()
                        }
                        <CtaButton label={nav.cta.clone()} />
                    </nav>

                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label={menu.toggle_label()}
                        aria-expanded={menu.is_open().to_string()}
                        aria-controls="mobile-drawer"
                        onclick={on_toggle.clone()}
                    >
                        <IconSvg icon={toggle_icon} />
                    </button>
                </div>

                {
                    if menu.is_open() {
                        html! {
                            <nav id="mobile-drawer" class="mobile-drawer" aria-label="Mobile">
                                <div class="mobile-drawer__list">
                                    {
                                        nav.links.iter().map(|link| html! {
                                            <a href={link.target.href()} class="mobile-drawer__link">{ link.label.clone() }</a>
                                        }).collect::<Html>()
                                    }
                                    <CtaButton label={nav.cta.clone()} class="mobile-drawer__cta" />
                                </div>
                            </nav>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
