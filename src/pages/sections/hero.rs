use yew::prelude::*;

use crate::components::button::{ButtonVariant, CtaButton};
use crate::components::reveal::Reveal;
use crate::content::{HeroContent, SectionId};
use crate::state::Entrance;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.content;

    html! {
        <section id={SectionId::Home.id()} class="hero">
            <div class="container hero__inner">
                <Reveal entrance={Entrance::Immediate} order={0}>
                    <span class="badge">{ hero.badge.clone() }</span>
                </Reveal>
                <Reveal entrance={Entrance::Immediate} order={1}>
                    <h1 class="hero__title text-gradient">{ hero.title.clone() }</h1>
                </Reveal>
                <Reveal entrance={Entrance::Immediate} order={2}>
                    <p class="hero__subtitle">{ hero.subtitle.clone() }</p>
                </Reveal>
                <Reveal entrance={Entrance::Immediate} order={3} class="hero__actions">
                    <CtaButton label={hero.primary_cta.clone()} large={true} arrow={true} />
                    <CtaButton label={hero.secondary_cta.clone()} variant={ButtonVariant::Outline} large={true} />
                </Reveal>
                <Reveal entrance={Entrance::Immediate} order={4} class="hero__stats">
                    {
                        hero.stats.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat__value">{ stat.value.clone() }</div>
                                <div class="stat__label">{ stat.label.clone() }</div>
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>
        </section>
    }
}
