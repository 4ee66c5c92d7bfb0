use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::components::header::HeaderBar;
use crate::content::SiteContent;
use crate::pages::sections::{
    about::About, benefits::Benefits, contact::Contact, features::Features, footer::Footer,
    hero::Hero, product::Product,
};
use crate::pages::styles::stylesheet;
use crate::state::{HeaderTone, MenuState};
use crate::subscription::{ScrollSubscription, WindowScrollHost};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

/// The whole page. Owns the only two pieces of UI state, the header tone fed
/// by the scroll subscription and the mobile menu, and hands both to
/// [`LandingView`].
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let tone = use_state_eq(HeaderTone::default);
    let menu = use_state_eq(MenuState::default);

    {
        let tone = tone.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = WindowScrollHost::current()
                    .map(|host| ScrollSubscription::open(host, move |next| tone.set(next)));
                if !subscription.as_ref().map_or(false, |s| s.is_listening()) {
                    warn!("Not tracking scroll position, header stays transparent");
                }
                move || drop(subscription)
            },
            (), // Once per mount
        );
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            debug!("Mobile menu is now {:?}", next);
            menu.set(next);
        })
    };

    html! {
        <>
            <style>{ stylesheet() }</style>
            <LandingView tone={*tone} menu={*menu} content={props.content.clone()} on_toggle={on_toggle} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingViewProps {
    pub tone: HeaderTone,
    pub menu: MenuState,
    pub content: Rc<SiteContent>,
    pub on_toggle: Callback<MouseEvent>,
}

/// Stateless composition of every section; output depends only on the props.
#[function_component(LandingView)]
pub fn landing_view(props: &LandingViewProps) -> Html {
    let content = &props.content;

    html! {
        <div class="landing-page">
            <HeaderBar
                tone={props.tone}
                menu={props.menu}
                brand={content.brand.clone()}
                nav={content.nav.clone()}
                on_toggle={props.on_toggle.clone()}
            />
            <Hero content={content.hero.clone()} />
            <About content={content.about.clone()} />
            <Product content={content.product.clone()} />
            <Features content={content.features.clone()} />
            <Benefits content={content.benefits.clone()} />
            <Contact content={content.contact.clone()} />
            <Footer brand={content.brand.clone()} content={content.footer.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScrollState;
    use yew::ServerRenderer;

    async fn render(tone: HeaderTone, menu: MenuState) -> String {
        ServerRenderer::<LandingView>::with_props(move || LandingViewProps {
            tone,
            menu,
            content: Rc::new(SiteContent::load().unwrap()),
            on_toggle: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn drawer_present(html: &str) -> bool {
        html.contains("id=\"mobile-drawer\"")
    }

    #[tokio::test]
    async fn identical_inputs_render_identically() {
        for (tone, menu) in [
            (HeaderTone::Transparent, MenuState::Closed),
            (HeaderTone::Elevated, MenuState::Open),
        ] {
            assert_eq!(render(tone, menu).await, render(tone, menu).await);
        }
    }

    #[tokio::test]
    async fn sections_are_anchored_in_page_order() {
        let html = render(HeaderTone::Transparent, MenuState::Closed).await;
        let positions: Vec<usize> = ["home", "about", "alhariss", "features", "contact"]
            .iter()
            .map(|id| {
                html.find(&format!("id=\"{id}\""))
                    .unwrap_or_else(|| panic!("missing section #{id}"))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn every_section_renders_its_copy() {
        let html = render(HeaderTone::Transparent, MenuState::Closed).await;
        for text in [
            "Smart Farming for a Sustainable Future",
            "About Zeraatech",
            "Meet AL HARISS",
            "Powerful Features",
            "Measurable Benefits",
            "Ready to Transform Your Farm?",
            "salah.eddine.seecs@gmail.com",
            "Rabat, Morocco",
            "Documentation",
        ] {
            assert!(html.contains(text), "missing {text:?}");
        }
    }

    #[tokio::test]
    async fn calls_to_action_are_plain_buttons() {
        let html = render(HeaderTone::Transparent, MenuState::Closed).await;
        for label in [
            "Get Started",
            "Discover AL HARISS",
            "Watch Demo",
            "Schedule Demo",
            "Download Brochure",
        ] {
            assert!(html.contains(label), "missing {label:?}");
        }
        // desktop CTA, menu toggle, two hero CTAs, two contact CTAs
        assert_eq!(html.matches("type=\"button\"").count(), 6);
    }

    #[tokio::test]
    async fn scrolled_blocks_start_hidden() {
        let html = render(HeaderTone::Transparent, MenuState::Closed).await;
        assert!(html.contains("class=\"reveal"));
        assert!(!html.contains("reveal--shown"));
    }

    #[tokio::test]
    async fn load_scroll_and_open_menu() {
        let mut scroll = ScrollState::default();
        let mut menu = MenuState::default();

        let html = render(scroll.tone(), menu).await;
        assert_eq!(scroll.offset(), 0);
        assert!(!menu.is_open());
        assert!(html.contains("site-header--transparent"));
        assert!(!drawer_present(&html));

        scroll.record(120.0);
        let html = render(scroll.tone(), menu).await;
        assert!(html.contains("site-header--elevated"));

        menu = menu.toggled();
        let html = render(scroll.tone(), menu).await;
        assert!(drawer_present(&html));
        assert_eq!(html.matches("class=\"mobile-drawer__link\"").count(), 5);
        assert_eq!(html.matches("mobile-drawer__cta").count(), 1);

        scroll.record(900.0);
        let html = render(scroll.tone(), menu).await;
        assert!(html.contains("site-header--elevated"));
        assert!(drawer_present(&html));

        scroll.record(10.0);
        let html = render(scroll.tone(), menu).await;
        assert!(html.contains("site-header--transparent"));
        assert!(drawer_present(&html), "scrolling must not close the menu");
    }
}
