use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{ABOUT, PRIVACY};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h4>"Contact"</h4>
                    <p>"support@tonywallet.ng"</p>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <A href=ABOUT attr:class="footer-link">"About"</A>
                    <A href=PRIVACY attr:class="footer-link">"Privacy"</A>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} TonyWallet. All rights reserved.", year)}</p>
        </footer>
    }
}
