use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub content: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Shows `content` while the trigger is hovered or focused.
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let open = use_state(|| false);
    let show = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <span
            class="tooltip-trigger"
            tabindex="0"
            onmouseenter={show.reform(|_: MouseEvent| ())}
            onmouseleave={hide.reform(|_: MouseEvent| ())}
            onfocus={show.reform(|_: FocusEvent| ())}
            onblur={hide.reform(|_: FocusEvent| ())}
        >
            { for props.children.iter() }
            if *open {
                <span class="tooltip-content" role="tooltip">{ &*props.content }</span>
            }
        </span>
    }
}
