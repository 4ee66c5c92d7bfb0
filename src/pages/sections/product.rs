use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::reveal::Reveal;
use crate::content::{ProductContent, SectionId};

#[derive(Properties, PartialEq)]
pub struct ProductProps {
    pub content: ProductContent,
}

/// The flagship product panel: pitch, spotlight card and deployment modes.
#[function_component(Product)]
pub fn product(props: &ProductProps) -> Html {
    let product = &props.content;
    let spotlight = &product.spotlight;

    html! {
        <section id={SectionId::Alhariss.id()} class="section section--tinted">
            <div class="container container--wide">
                <Reveal order={0} class="section__heading">
                    <span class="badge badge--solid">{ product.badge.clone() }</span>
                    <h2 class="section__title text-gradient">{ product.title.clone() }</h2>
                    <p class="section__intro">{ product.intro.clone() }</p>
                </Reveal>

                <Reveal order={1} class="showcase">
                    <div class="split">
                        <div>
                            <h3 class="subheading subheading--large">{ product.pitch_title.clone() }</h3>
                            <p class="lead">{ product.pitch.clone() }</p>
                            <ul class="highlights">
                                {
                                    product.highlights.iter().map(|highlight| html! {
                                        <li class="highlight">
                                            <span class="highlight__dot"></span>
                                            <span>{ highlight.clone() }</span>
                                        </li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                        <div class="spotlight">
                            <IconSvg icon={spotlight.icon} size={48} />
                            <h4 class="spotlight__title">{ spotlight.title.clone() }</h4>
                            <p class="spotlight__body">{ spotlight.body.clone() }</p>
                        </div>
                    </div>
                </Reveal>

                <Reveal order={2}>
                    <h3 class="subheading subheading--large subheading--centered">{ product.deployment_title.clone() }</h3>
                    <div class="grid grid--two">
                        {
                            product.deployment_modes.iter().map(|mode| html! {
                                <div class="card card--hover">
                                    <div class="card__header card__header--inline">
                                        <IconSvg icon={mode.icon} size={32} class="accent" />
                                        <h4 class="card__title">{ mode.title.clone() }</h4>
                                    </div>
                                    <p class="card__body">{ mode.body.clone() }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
