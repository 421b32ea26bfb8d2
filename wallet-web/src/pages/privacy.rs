//! Privacy Policy

use leptos::prelude::*;

struct PolicySection {
    title: &'static str,
    content: Option<&'static str>,
    items: &'static [&'static str],
}

static SECTIONS: [PolicySection; 4] = [
    PolicySection {
        title: "Introduction",
        content: Some(
            "We respect your privacy and are committed to protecting your personal data. This Privacy Policy \
             explains how we collect, use, and safeguard your information when you use our services.",
        ),
        items: &[],
    },
    PolicySection {
        title: "Information We Collect",
        content: None,
        items: &[
            "Personal information you provide (e.g., name, email, account details).",
            "Transaction data related to your use of our platform.",
            "Technical data such as IP address, browser type, and device information.",
        ],
    },
    PolicySection {
        title: "How We Use Your Data",
        content: None,
        items: &[
            "To provide secure transactions.",
            "To improve our services.",
            "To personalize your experience.",
            "To comply with legal obligations.",
        ],
    },
    PolicySection {
        title: "Your Rights",
        content: Some(
            "You have the right to access, update, or delete your personal data at any time. Contact us if \
             you wish to exercise these rights.",
        ),
        items: &[],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let sections = SECTIONS
        .iter()
        .map(|section| {
            view! {
                <section style="margin-bottom: 32px;">
                    <h2 style="font-size: 22px; margin-bottom: 12px;">{section.title}</h2>
                    {section.content.map(|text| view! { <p style="color: var(--text-secondary);">{text}</p> })}
                    {(!section.items.is_empty()).then(|| view! {
                        <ul style="margin-left: 24px; color: var(--text-secondary);">
                            {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                    })}
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="app-container" style="display: flex; justify-content: center; padding: 48px 24px;">
            <div class="card about-container">
                <h1 class="card-title" style="margin-bottom: 32px;">"Privacy Policy"</h1>
                {sections}
            </div>
        </div>
    }
}
