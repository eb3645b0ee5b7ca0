//! Home page: bilingual hero, feature grid, and headline numbers.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::session::{Language, SessionState};

/// One entry in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Feature {
    title: &'static str,
    description: &'static str,
}

fn features(language: Language) -> [Feature; 6] {
    match language {
        Language::En => [
            Feature {
                title: "Personalized Recommendations",
                description: "AI-powered analysis of your academic performance to suggest the best university programs",
            },
            Feature {
                title: "Dual Education Systems",
                description: "Support for both GCE (O/A Level) and French (BEPC/Baccalauréat) educational systems",
            },
            Feature {
                title: "Job Market Insights",
                description: "Real-time analysis of career opportunities and employment trends in Cameroon",
            },
            Feature {
                title: "Multi-Agent AI System",
                description: "Sophisticated AI agents working together to provide comprehensive guidance",
            },
            Feature {
                title: "Bilingual Support",
                description: "Full support for English and French, respecting Cameroon's bilingual nature",
            },
            Feature {
                title: "AI-Generated Content",
                description: "Personalized study guides, career advice, and preparation tips",
            },
        ],
        Language::Fr => [
            Feature {
                title: "Recommandations Personnalisées",
                description: "Analyse IA de vos performances académiques pour suggérer les meilleurs programmes universitaires",
            },
            Feature {
                title: "Systèmes Éducatifs Duaux",
                description: "Support pour les systèmes GCE (O/A Level) et français (BEPC/Baccalauréat)",
            },
            Feature {
                title: "Aperçus du Marché du Travail",
                description: "Analyse en temps réel des opportunités de carrière et tendances d'emploi au Cameroun",
            },
            Feature {
                title: "Système IA Multi-Agents",
                description: "Agents IA sophistiqués travaillant ensemble pour fournir des conseils complets",
            },
            Feature {
                title: "Support Bilingue",
                description: "Support complet en anglais et français, respectant la nature bilingue du Cameroun",
            },
            Feature {
                title: "Contenu Généré par IA",
                description: "Guides d'étude personnalisés, conseils de carrière et astuces de préparation",
            },
        ],
    }
}

fn stats(language: Language) -> [(&'static str, &'static str); 4] {
    match language {
        Language::En => [
            ("3+", "Major Universities"),
            ("15+", "Study Programs"),
            ("10+", "Career Sectors"),
            ("2", "Education Systems"),
        ],
        Language::Fr => [
            ("3+", "Universités Principales"),
            ("15+", "Programmes d'Études"),
            ("10+", "Secteurs de Carrière"),
            ("2", "Systèmes Éducatifs"),
        ],
    }
}

fn hero_title(language: Language) -> &'static str {
    match language {
        Language::En => "Find Your Path to Academic Success",
        Language::Fr => "Trouvez Votre Voie vers la Réussite Académique",
    }
}

fn hero_subtitle(language: Language) -> &'static str {
    match language {
        Language::En => {
            "AI-powered guidance matching your grades to the universities and careers that fit you best."
        }
        Language::Fr => {
            "Des conseils propulsés par l'IA qui relient vos notes aux universités et carrières qui vous correspondent."
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let language = move || session.get().language;

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1 class="home-hero__title">{move || hero_title(language())}</h1>
                <p class="home-hero__subtitle">{move || hero_subtitle(language())}</p>
                <div class="home-hero__actions">
                    <a class="btn btn--primary" href="/profile">
                        {move || match language() {
                            Language::En => "Get Started",
                            Language::Fr => "Commencer",
                        }}
                    </a>
                    <a class="btn btn--outline" href="/about">
                        {move || match language() {
                            Language::En => "Learn More",
                            Language::Fr => "En Savoir Plus",
                        }}
                    </a>
                </div>
            </section>

            <section class="home-stats">
                {move || {
                    stats(language())
                        .into_iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="home-stats__item">
                                    <span class="home-stats__number">{number}</span>
                                    <span class="home-stats__label">{label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>

            <section class="home-features">
                {move || {
                    features(language())
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="home-features__card">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
        </div>
    }
}
