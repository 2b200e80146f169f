use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PillOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct PillGroupProps {
    pub options: Vec<PillOption>,
    pub selected: &'static str,
    pub on_select: Callback<&'static str>,
}

/// Single-choice row of pill buttons.
#[function_component(PillGroup)]
pub fn pill_group(props: &PillGroupProps) -> Html {
    html! {
        <div class="dmc-pills">
            { for props.options.iter().map(|option| {
                let value = option.value;
                let on_select = props.on_select.clone();
                let class = if value == props.selected { "dmc-pill selected" } else { "dmc-pill" };
                html! {
                    <button
                        key={value}
                        type="button"
                        class={class}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(value))}
                    >
                        { option.label }
                    </button>
                }
            })}
        </div>
    }
}
