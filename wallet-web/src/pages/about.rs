//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; padding: 48px 24px;">
            <div class="card about-container">
                <h1 class="card-title" style="text-align: center; margin-bottom: 32px;">"About Us"</h1>
                <div style="line-height: 1.8; font-size: 16px; color: var(--text-secondary);">
                    <p style="margin-bottom: 24px;">
                        "Welcome to TonyWallet, your tool to manage money online with ease, security, and speed."
                    </p>
                    <p style="margin-bottom: 24px;">
                        "We built this wallet so you can shop, transfer, and track all in one place. 
                        Our goal is to give you full control without the stress."
                    </p>
                    <p>
                        "With encrypted transactions, real-time updates, and 24/7 support, we're here to make 
                        your financial experience seamless. Trust, transparency, and usability are at the heart 
                        of everything we do."
                    </p>
                </div>
            </div>
        </div>
    }
}
