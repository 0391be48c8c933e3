use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &SearchBarProps) -> Html {
    let onkeyup = {
        let on_search = p.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                on_search.emit(input.value());
            }
        })
    };
    html! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search comments..."
                {onkeyup}
            />
        </div>
    }
}
