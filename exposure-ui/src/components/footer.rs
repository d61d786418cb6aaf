// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

#[function_component(PageFooter)]
pub fn page_footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer>
            <p id="year">{ format!("© {year} · awareness demo · nothing typed here leaves your browser") }</p>
        </footer>
    }
}
