//! Public marketing page.

use leptos::prelude::*;
use leptos_router::components::A;

const STEPS: [(&str, &str); 4] = [
    ("Sign Up", "Create an account as a donor or a receiver."),
    ("Post Food", "Donors list surplus food with its quantity, expiry and pickup address."),
    ("Find & Claim", "Receivers browse the live map and claim what they can collect."),
    ("Pick Up", "Meet at the address and make sure the food gets eaten, not thrown away."),
];

const FEATURES: [(&str, &str); 3] = [
    ("Interactive Map", "See every available donation near you, pinned where it can be picked up."),
    ("Secure & Direct", "Only signed-in receivers can claim, and each donation goes to one claimant."),
    ("Track Your Impact", "Your profile keeps a history of everything you have shared or received."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="hero">
                <h1 class="hero__title">"Don't Waste It, Share It."</h1>
                <p class="hero__subtitle">
                    "FoodShare connects people with surplus food to the people and organisations who need it."
                </p>
                <div class="hero__actions">
                    <A href="/register" attr:class="btn btn--primary">"Get Started"</A>
                    <A href="/donations" attr:class="btn">"View Donations"</A>
                </div>
            </section>

            <section class="landing-section">
                <h2>"How It Works"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, body))| {
                            view! {
                                <li class="steps__item">
                                    <span class="steps__number">{i + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="landing-section">
                <h2>"Key Features"</h2>
                <div class="features">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="features__item">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Make a Difference?"</h2>
                <p>"Join today and help make sure good food feeds people."</p>
                <A href="/register" attr:class="btn btn--primary">"Join FoodShare"</A>
            </section>

            <footer class="site-footer">
                <p>"FoodShare"</p>
            </footer>
        </div>
    }
}
