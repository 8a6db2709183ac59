use log::debug;
use yew::prelude::*;

use crate::data::PLACEHOLDER_IMAGE;

/// Source to swap in after `current` failed to load. The placeholder itself
/// failing yields nothing, so a broken placeholder cannot loop.
pub fn fallback_for(current: &str) -> Option<&'static str> {
    (current != PLACEHOLDER_IMAGE).then_some(PLACEHOLDER_IMAGE)
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub lazy: bool,
    #[prop_or_default]
    pub onload: Callback<Event>,
}

/// `<img>` that falls back to the site placeholder when loading fails.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let src = use_state(|| props.src.clone());

    {
        let src = src.clone();
        use_effect_with_deps(move |next: &AttrValue| {
            src.set(next.clone());
            || ()
        }, props.src.clone());
    }

    let onerror = {
        let src = src.clone();
        Callback::from(move |_: Event| {
            if let Some(fallback) = fallback_for(&src) {
                debug!("Image {} failed, using placeholder", *src);
                src.set(AttrValue::from(fallback));
            }
        })
    };

    html! {
        <img
            src={(*src).clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading={props.lazy.then(|| AttrValue::from("lazy"))}
            onload={props.onload.clone()}
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_image_falls_back_to_placeholder() {
        assert_eq!(fallback_for("https://example.com/missing.png"), Some(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_failed_placeholder_does_not_retry() {
        assert_eq!(fallback_for(PLACEHOLDER_IMAGE), None);
    }
}
