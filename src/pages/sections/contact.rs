use yew::prelude::*;

use crate::components::button::{ButtonVariant, CtaButton};
use crate::components::icon::IconSvg;
use crate::components::reveal::Reveal;
use crate::content::{ContactContent, SectionId};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = &props.content;

    html! {
        <section id={SectionId::Contact.id()} class="section section--plain">
            <div class="container">
                <Reveal order={0} class="section__heading">
                    <h2 class="section__title text-gradient">{ contact.title.clone() }</h2>
                    <p class="section__intro">{ contact.intro.clone() }</p>
                </Reveal>

                <Reveal order={1} class="panel panel--tinted panel--roomy">
                    <div class="split split--top">
                        <div>
                            <h3 class="subheading">{ contact.reach_title.clone() }</h3>
                            <div class="channels">
                                {
                                    contact.channels.iter().map(|channel| html! {
                                        <div class="channel">
                                            <IconSvg icon={channel.icon} class="accent" />
                                            <div>
                                                <div class="channel__label">{ channel.label.clone() }</div>
                                                <div class="muted">{ channel.value.clone() }</div>
                                            </div>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div>
                            <h3 class="subheading">{ contact.demo_title.clone() }</h3>
                            <div class="demo">
                                <CtaButton label={contact.demo_primary.clone()} large={true} arrow={true} class="btn--block" />
                                <CtaButton
                                    label={contact.demo_secondary.clone()}
                                    variant={ButtonVariant::Outline}
                                    large={true}
                                    class="btn--block"
                                />
                                <p class="demo__note">{ contact.demo_note.clone() }</p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
