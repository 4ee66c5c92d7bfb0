use yew::prelude::*;

use crate::components::icon::{Icon, IconSvg};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Outline => "btn--outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(false)]
    pub large: bool,
    #[prop_or(false)]
    pub arrow: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Call-to-action button with no handler attached. Every CTA on the page is
/// reserved for future wiring; activating one does nothing.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("btn", props.variant.class(), props.large.then(|| "btn--large"), props.class.clone())}
        >
            { props.label.clone() }
            {
                if props.arrow {
                    html! { <IconSvg icon={Icon::ArrowRight} size={20} class="btn__arrow" /> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}
