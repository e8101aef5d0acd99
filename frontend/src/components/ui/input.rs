use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    pub oninput: Callback<String>,
}

/// Controlled text input. Emits the full value on every keystroke.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let emit = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            emit.emit(input.value());
        })
    };
    html! {
        <input
            type={props.input_type.clone()}
            class={classes!("input", props.class.clone())}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            aria-label={props.aria_label.clone()}
            {oninput}
        />
    }
}
