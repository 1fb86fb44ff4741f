use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::nav::{anchor_click, Nav};
use crate::components::reveal::Reveal;
use crate::components::stat_counter::StatCounter;
use crate::components::worker_form::WorkerForm;
use crate::config::SiteConfig;

const STEPS: &[(&str, &str)] = &[
    (
        "Tell us what you need",
        "Describe the task, where it is and when it should happen.",
    ),
    (
        "Get matched in hours",
        "We pair you with a vetted local worker who fits the job.",
    ),
    (
        "Pay when it's done",
        "You confirm the work, the worker gets paid. No surprises.",
    ),
];

const SERVICES: &[(&str, &str)] = &[
    ("Cleaning", "Homes, stairwells and offices, one-off or weekly."),
    ("Delivery", "Groceries, parcels and pharmacy runs the same day."),
    ("Moving", "An extra pair of hands or a full apartment move."),
    ("Yard work", "Lawns, leaves, snow and everything in between."),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: SiteConfig,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div id="top" class="page">
            <Nav />
            <main>
                <section class="hero">
                    <h1>{"Get things done. Earn what you want."}</h1>
                    <p class="lead">
                        {"EarnUwant connects busy households with trusted local workers \
                          for cleaning, delivery, moving and more."}
                    </p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#contact" onclick={anchor_click("#contact")}>
                            {"Book a task"}
                        </a>
                        <a class="btn btn-ghost" href="#apply" onclick={anchor_click("#apply")}>
                            {"Start earning"}
                        </a>
                    </div>
                    <div class="hero-stats">
                        <div class="stat">
                            <StatCounter target={1200} />
                            <span class="stat-label">{"Active workers"}</span>
                        </div>
                        <div class="stat">
                            <StatCounter target={45000} />
                            <span class="stat-label">{"Tasks completed"}</span>
                        </div>
                        <div class="stat">
                            <StatCounter target={12} />
                            <span class="stat-label">{"Cities served"}</span>
                        </div>
                    </div>
                </section>

                <section id="how-it-works" class="section">
                    <h2>{"How it works"}</h2>
                    <div class="cards">
                        { for STEPS.iter().enumerate().map(|(i, &(title, text))| html! {
                            <Reveal class="card step">
                                <span class="step-number">{i + 1}</span>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="services" class="section">
                    <h2>{"Services"}</h2>
                    <div class="cards">
                        { for SERVICES.iter().map(|&(title, text)| html! {
                            <Reveal class="card service">
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="apply" class="section">
                    <h2>{"Work with us"}</h2>
                    <p>{"Set your own hours, pick the jobs you like and get paid fast."}</p>
                    <Reveal>
                        <WorkerForm />
                    </Reveal>
                </section>

                <section id="contact" class="section">
                    <h2>{"Get in touch"}</h2>
                    <p>{"Tell us about your task and we will get back to you the same day."}</p>
                    <Reveal>
                        <ContactForm />
                    </Reveal>
                </section>
            </main>
            <Footer contact_email={props.config.contact_email} />
        </div>
    }
}
