use serde::Deserialize;
use yew::prelude::*;

/// Line icons available to content blocks, looked up by name.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Menu,
    Close,
    Leaf,
    Brain,
    Camera,
    Bot,
    Smartphone,
    Wifi,
    TrendingDown,
    Clock,
    Shield,
    BarChart,
    CheckCircle,
    ArrowRight,
    Mail,
    Phone,
    MapPin,
}

impl Icon {
    /// Path data on a 24x24 stroke grid.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            Icon::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4",
                "M12 5v13",
            ],
            Icon::Camera => &[
                "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
                "M9 13a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Wifi => &[
                "M12 20h.01",
                "M2 8.82a15 15 0 0 1 20 0",
                "M5 12.859a10 10 0 0 1 14 0",
                "M8.5 16.429a5 5 0 0 1 7 0",
            ],
            Icon::TrendingDown => &["m22 17-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
            Icon::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconSvgProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_kebab_case() {
        let icon: Icon = serde_json::from_str("\"trending-down\"").unwrap();
        assert_eq!(icon, Icon::TrendingDown);
        let icon: Icon = serde_json::from_str("\"map-pin\"").unwrap();
        assert_eq!(icon, Icon::MapPin);
    }

    #[test]
    fn unknown_name_has_no_fallback() {
        assert!(serde_json::from_str::<Icon>("\"tractor\"").is_err());
    }

    #[test]
    fn every_icon_draws_something() {
        let all = [
            Icon::Menu,
            Icon::Close,
            Icon::Leaf,
            Icon::Brain,
            Icon::Camera,
            Icon::Bot,
            Icon::Smartphone,
            Icon::Wifi,
            Icon::TrendingDown,
            Icon::Clock,
            Icon::Shield,
            Icon::BarChart,
            Icon::CheckCircle,
            Icon::ArrowRight,
            Icon::Mail,
            Icon::Phone,
            Icon::MapPin,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{icon:?}");
        }
    }
}
