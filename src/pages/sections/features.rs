use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::reveal::Reveal;
use crate::content::{CardGrid, SectionId};

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub content: CardGrid,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let features = &props.content;

    html! {
        <section id={SectionId::Features.id()} class="section section--plain">
            <div class="container container--wide">
                <Reveal order={0} class="section__heading">
                    <h2 class="section__title text-gradient">{ features.title.clone() }</h2>
                    <p class="section__intro">{ features.intro.clone() }</p>
                </Reveal>

                <div class="grid grid--four">
                    {
                        features.items.iter().zip(1u32..).map(|(item, order)| html! {
                            <Reveal order={order}>
                                <div class="card card--hover card--full">
                                    <IconSvg icon={item.icon} size={48} class="accent card__icon" />
                                    <h3 class="card__title">{ item.title.clone() }</h3>
                                    <p class="card__body">{ item.body.clone() }</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
