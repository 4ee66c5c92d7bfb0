use yew::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::Reveal;
use crate::content::{AboutContent, SectionId};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.content;

    html! {
        <section id={SectionId::About.id()} class="section section--plain">
            <div class="container container--wide">
                <Reveal order={0} class="section__heading">
                    <h2 class="section__title text-gradient">{ about.title.clone() }</h2>
                    <p class="section__intro">{ about.intro.clone() }</p>
                </Reveal>

                <div class="split">
                    <Reveal order={1}>
                        <h3 class="subheading">{ about.mission_title.clone() }</h3>
                        <p class="lead">{ about.mission.clone() }</p>
                        <div class="pillars">
                            {
                                about.pillars.iter().map(|pillar| html! {
                                    <div class="pillar">
                                        <IconSvg icon={pillar.icon} size={32} class="accent" />
                                        <div class="pillar__label">{ pillar.label.clone() }</div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </Reveal>

                    <Reveal order={2}>
                        <div class="panel panel--tinted">
                            <h3 class="subheading">{ about.why_title.clone() }</h3>
                            <div class="reasons">
                                {
                                    about.reasons.iter().map(|reason| html! {
                                        <div class="reason">
                                            <IconSvg icon={Icon::CheckCircle} size={20} class="accent reason__mark" />
                                            <div>
                                                <div class="reason__title">{ reason.title.clone() }</div>
                                                <div class="muted">{ reason.detail.clone() }</div>
                                            </div>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
