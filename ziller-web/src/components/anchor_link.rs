use crate::dom;
use yew::prelude::*;
use ziller_core::navigation::is_scroll_anchor;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub href: AttrValue,
    /// Sticky header height to leave free above the target.
    pub header_offset_px: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-page link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(p: &Props) -> Html {
    let onclick = {
        let href = p.href.clone();
        let offset = p.header_offset_px;
        Callback::from(move |e: MouseEvent| {
            if is_scroll_anchor(&href) && dom::scroll_to_anchor(&href, offset) {
                e.prevent_default();
            }
        })
    };
    html! {
        <a href={p.href.clone()} class={p.class.clone()} {onclick}>{ p.children.clone() }</a>
    }
}
