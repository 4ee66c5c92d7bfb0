use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::reveal::Reveal;
use crate::content::CardGrid;

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub content: CardGrid,
}

// Not a navigation target, so no anchor id.
#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    let benefits = &props.content;

    html! {
        <section class="section section--tinted-reverse">
            <div class="container container--wide">
                <Reveal order={0} class="section__heading">
                    <h2 class="section__title text-gradient">{ benefits.title.clone() }</h2>
                    <p class="section__intro">{ benefits.intro.clone() }</p>
                </Reveal>

                <div class="grid grid--four">
                    {
                        benefits.items.iter().zip(1u32..).map(|(item, order)| html! {
                            <Reveal order={order}>
                                <div class="benefit card--hover">
                                    <IconSvg icon={item.icon} size={48} class="accent benefit__icon" />
                                    <h3 class="benefit__title">{ item.title.clone() }</h3>
                                    <p class="muted">{ item.body.clone() }</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
