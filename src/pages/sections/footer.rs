use yew::prelude::*;

use crate::content::{Brand, FooterContent};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { brand, content } = props;

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div>
                        <img src={brand.logo.clone()} alt={brand.name.clone()} class="site-footer__logo" />
                        <p class="site-footer__muted">{ brand.tagline.clone() }</p>
                    </div>
                    {
                        content.columns.iter().map(|column| html! {
                            <div>
                                <h4 class="site-footer__heading">{ column.title.clone() }</h4>
                                <ul class="site-footer__list">
                                    { for column.items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="site-footer__legal">
                    <p>{ content.copyright.clone() }</p>
                </div>
            </div>
        </footer>
    }
}
