//! Home page component
//!
//! The single-page marketing experience for 82 Labs:
//! - SEO meta tags for search engine optimization
//! - Hero section with trusted-by badge and demo CTA
//! - Models section with a tabbed model-family selector
//! - Solutions section with benefit cards
//! - Animated scene section
//! - Industries section with image cards
//! - Testimonials, company statement and footer
//! - Contact request modal with toast feedback

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::contact_form::ContactModal;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NotificationManager, NotificationsContainer};
use crate::ui::scene::AnimatedScene;
use crate::ui::theme::use_theme_context;

/// Home page component with scroll-based animations
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme_context();
    let notifications = NotificationManager::new();

    let contact_modal_open = RwSignal::new(false);
    let open_contact = Callback::new(move |_: ()| contact_modal_open.set(true));
    let close_contact = Callback::new(move |_: ()| contact_modal_open.set(false));

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header theme=theme on_request_demo=open_contact />

            // Hero Section
            <section id="hero" class="pt-24 pb-16 px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center">
                    // Trusted by companies badge
                    <div class="mb-8 home-fade-in">
                        <p class="text-sm text-theme-secondary mb-4">
                            "Trusted by industry leaders and developers worldwide"
                        </p>
                        <div class="flex justify-center items-center space-x-8 opacity-60">
                            <span class="text-lg font-semibold text-theme-primary stagger-item">"ext"</span>
                            <span class="text-lg font-semibold text-theme-primary stagger-item">"ENSEMBLE"</span>
                            <span class="text-lg font-semibold text-theme-primary stagger-item">"TD Bank"</span>
                        </div>
                    </div>

                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-theme-primary mb-6 max-w-3xl mx-auto tracking-tight home-fade-in home-delay-200">
                        "The all-in-one platform for private and secure AI"
                    </h1>

                    <p class="text-lg sm:text-xl text-theme-secondary mb-8 max-w-2xl mx-auto leading-relaxed home-fade-in home-delay-400">
                        "82 Labs brings you cutting-edge multilingual models, advanced retrieval, and an AI workspace tailored for the modern enterprise, all within a single, secure platform."
                    </p>

                    <div class="home-fade-in home-delay-400">
                        <button
                            class="minimal-button minimal-button-primary text-lg px-8 py-4"
                            on:click=move |_| open_contact.run(())
                            aria-label="Request a demo"
                        >
                            "Request a demo"
                        </button>
                    </div>
                </div>
            </section>

            // Models Section
            <section id="platform" class="py-16 px-4 sm:px-6 lg:px-8 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12 reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "State-of-the-art generative and retrieval models"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "Unlock the unlimited potential of AI with our three model families, designed to meet the diverse needs of enterprises."
                        </p>
                    </div>

                    <ModelShowcase />
                </div>
            </section>

            // Solutions Section
            <section id="solutions" class="py-16 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12 reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Build high-impact applications grounded in your proprietary data"
                        </h2>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <SolutionCard
                            icon=SolutionIcon::Grid
                            title="Scalable"
                            description="Take applications from proof of concept to full production with our compressed, enterprise-focused models, built to limit costs while maximizing performance."
                        />
                        <SolutionCard
                            icon=SolutionIcon::Activity
                            title="Accurate"
                            description="Fine-tune our models to your company data with built-in retrieval-augmented generation (RAG), providing verifiable outputs grounded in your sources of truth."
                        />
                        <SolutionCard
                            icon=SolutionIcon::Lock
                            title="Secure"
                            description="Keep your critical data protected with enterprise-grade security, advanced access controls, and private deployment options."
                        />
                    </div>
                </div>
            </section>

            // Animated Scene Section
            <section id="research" class="py-16 px-4 sm:px-6 lg:px-8 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12 reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Research that moves with you"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "From frontier model training to efficient deployment, our research keeps your stack at the cutting edge."
                        </p>
                    </div>

                    <div class="rounded-2xl overflow-hidden border border-theme reveal">
                        <AnimatedScene />
                    </div>
                </div>
            </section>

            // Industries Section
            <section id="resources" class="py-16 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12 reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "AI solutions for the world's most complex industries"
                        </h2>
                    </div>

                    <div class="grid md:grid-cols-2 gap-6">
                        <IndustryCard
                            title="Technology"
                            image_url="https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        />
                        <IndustryCard
                            title="Finance"
                            image_url="https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        />
                    </div>
                </div>
            </section>

            // Testimonials Section
            <section class="py-16 px-4 sm:px-6 lg:px-8 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12 reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Teams ship faster with 82 Labs"
                        </h2>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <TestimonialCard
                            quote="We moved our document search to a private deployment in under a month. Accuracy went up and our data never left the building."
                            author="Maya Chen"
                            role="VP Engineering, ext"
                        />
                        <TestimonialCard
                            quote="The retrieval models ground every answer in our own knowledge base. Our support team finally trusts the output."
                            author="Daniel Osei"
                            role="Head of Platform, ENSEMBLE"
                        />
                        <TestimonialCard
                            quote="Enterprise controls out of the box. Security review took days instead of quarters."
                            author="Priya Raman"
                            role="CISO, TD Bank"
                        />
                    </div>
                </div>
            </section>

            // Company Section
            <section id="company" class="py-16 px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center reveal">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-6">
                        "Transform the way you work with secure AI agents, advanced search, and leading generative AI - all in one place."
                    </h2>
                    <button
                        class="flex items-center justify-center mx-auto text-theme-primary hover:text-theme-secondary transition-all duration-300 font-medium group"
                        on:click=move |_| open_contact.run(())
                    >
                        "Learn more"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 ml-2 transition-transform group-hover:translate-x-1" />
                    </button>
                </div>
            </section>

            // Footer
            <Footer />

            // Contact Modal
            <ContactModal
                is_open=Signal::derive(move || contact_modal_open.get())
                on_close=close_contact
                notifications=notifications
            />

            // Toasts
            <NotificationsContainer notifications=notifications.notifications() />

            // CSS Animations
            <HomeStyles />

            // Intersection Observer for scroll animations
            <ScrollRevealScript />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(
    theme: crate::ui::theme::ThemeContext,
    on_request_demo: Callback<()>,
) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (scrolled, _set_scrolled) = signal(false);

    // Solidify the header background once the page scrolls
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;
        use leptos::web_sys;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let is_scrolled = web_sys::window()
                .map(|w| w.scroll_y().unwrap_or(0.0) > 10.0)
                .unwrap_or(false);
            if scrolled.get_untracked() != is_scrolled {
                _set_scrolled.set(is_scrolled);
            }
        });

        on_cleanup(move || drop(handle_scroll));
    }

    let nav_items = [
        ("#platform", "Platform"),
        ("#solutions", "Solutions"),
        ("#research", "Research"),
        ("#resources", "Resources"),
        ("#company", "Company"),
    ];

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50 transition-shadow duration-300"
            class:shadow-md=move || scrolled.get()
        >
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#hero" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"82 Labs"</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <div class="flex items-center gap-4">
                            {nav_items.iter().map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                >
                                    {*label}
                                </a>
                            }).collect_view()}
                        </div>
                        <button
                            class="minimal-button minimal-button-primary"
                            on:click=move |_| on_request_demo.run(())
                        >
                            "Request a demo"
                        </button>
                        <ThemeToggle theme=theme />
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-2 border-t border-theme/50">
                        {nav_items.iter().map(|(href, label)| view! {
                            <a
                                href=*href
                                class="flex items-center justify-between w-full px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {*label}
                                <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5 opacity-60" />
                            </a>
                        }).collect_view()}
                        <button
                            class="minimal-button minimal-button-primary w-full mt-4"
                            on:click=move |_| {
                                set_mobile_menu_open.set(false);
                                on_request_demo.run(());
                            }
                        >
                            "Request a demo"
                        </button>
                        <div class="px-4 pt-2">
                            <ThemeToggle theme=theme />
                        </div>
                    </div>
                </div>
            </nav>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: crate::ui::theme::ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <Icon name=icons::SUN class="w-5 h-5" />
                    }
                } else {
                    view! {
                        <Icon name=icons::MOON class="w-5 h-5" />
                    }
                }
            }}
        </button>
    }
}

/// Tabbed model family showcase
#[component]
fn ModelShowcase() -> impl IntoView {
    let active_model = RwSignal::new("command");

    let families = [
        (
            "command",
            "Command",
            "Streamline your workflows with advanced language models for generating text, analyzing documents, and building AI assistants.",
        ),
        (
            "embed",
            "Embed",
            "Power semantic search and retrieval over your proprietary data with multilingual embedding models.",
        ),
        (
            "rerank",
            "Rerank",
            "Boost the relevance of any search stack by reordering results with a purpose-built ranking model.",
        ),
    ];

    view! {
        // Model selector tabs
        <div class="mb-8 reveal">
            <div class="flex justify-center">
                <div class="inline-flex items-center border-b-2 border-orange-200">
                    {families.iter().map(|(key, label, _)| {
                        let key = *key;
                        view! {
                            <button
                                class="px-4 py-2 font-medium transition-all duration-300"
                                class:tab-active=move || active_model.get() == key
                                class:tab-inactive=move || active_model.get() != key
                                on:click=move |_| active_model.set(key)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5 opacity-60 ml-2" />
                </div>
            </div>
        </div>

        // Model card
        <div class="minimal-card max-w-md mx-auto bg-gray-900 text-white reveal">
            {move || {
                let active = active_model.get();
                let (_, label, description) = families
                    .iter()
                    .find(|(key, _, _)| *key == active)
                    .unwrap_or(&families[0]);
                view! {
                    <h3 class="text-xl font-semibold mb-4">{*label}</h3>
                    <p class="text-gray-300 mb-6">{*description}</p>
                }
            }}
            <button class="flex items-center text-white hover:text-gray-300 transition-all duration-300 group">
                "Learn more"
                <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2 transition-transform group-hover:translate-x-1" />
            </button>
        </div>
    }
}

/// Inline icons for the solutions cards
#[derive(Clone, Copy, PartialEq)]
enum SolutionIcon {
    Grid,
    Activity,
    Lock,
}

/// Benefit card in the solutions grid
#[component]
fn SolutionCard(
    icon: SolutionIcon,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center stagger-item">
            <div class="w-12 h-12 mx-auto mb-4 text-theme-primary transition-transform hover:scale-110 duration-300">
                {match icon {
                    SolutionIcon::Grid => view! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" class="w-full h-full">
                            <rect x="3" y="3" width="7" height="7" rx="1"/>
                            <rect x="14" y="3" width="7" height="7" rx="1"/>
                            <rect x="14" y="14" width="7" height="7" rx="1"/>
                            <rect x="3" y="14" width="7" height="7" rx="1"/>
                        </svg>
                    }.into_any(),
                    SolutionIcon::Activity => view! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" class="w-full h-full">
                            <polyline points="22,12 18,12 15,21 9,3 6,12 2,12"/>
                        </svg>
                    }.into_any(),
                    SolutionIcon::Lock => view! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" class="w-full h-full">
                            <rect x="3" y="11" width="18" height="11" rx="2" ry="2"/>
                            <circle cx="12" cy="16" r="1"/>
                            <path d="M7 11V7a5 5 0 0 1 10 0v4"/>
                        </svg>
                    }.into_any(),
                }}
            </div>
            <h3 class="text-xl font-semibold text-theme-primary mb-3">{title}</h3>
            <p class="text-theme-secondary">{description}</p>
        </div>
    }
}

/// Industry card with a background image and hover darkening
#[component]
fn IndustryCard(title: &'static str, image_url: &'static str) -> impl IntoView {
    view! {
        <div
            class="minimal-card bg-cover bg-center h-64 relative overflow-hidden group stagger-item"
            style=format!("background-image: url('{}')", image_url)
        >
            <div class="absolute inset-0 bg-black/40 group-hover:bg-black/50 transition-all duration-300"></div>
            <div class="absolute bottom-6 left-6 text-white transform group-hover:translate-y-1 transition-transform duration-300">
                <h3 class="text-2xl font-semibold mb-2">{title}</h3>
            </div>
        </div>
    }
}

/// Customer quote card
#[component]
fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border border-theme stagger-item">
            <p class="text-theme-secondary leading-relaxed mb-6">{format!("\u{201c}{}\u{201d}", quote)}</p>
            <div>
                <p class="font-semibold text-theme-primary">{author}</p>
                <p class="text-sm text-theme-tertiary">{role}</p>
            </div>
        </div>
    }
}

/// 82 Labs logo mark
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-orange-500 to-gray-900 rounded-xl
                    flex items-center justify-center shadow-lg">
            <span class="text-white font-bold text-sm">"82"</span>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"82 Labs"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "Private and secure AI for the modern enterprise. Multilingual models, advanced retrieval, and an AI workspace in one platform."
                        </p>
                    </div>

                    // Platform links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Platform"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#platform" class="text-sm text-theme-secondary hover:text-theme-primary transition-colors">
                                    "Models"
                                </a>
                            </li>
                            <li>
                                <a href="#solutions" class="text-sm text-theme-secondary hover:text-theme-primary transition-colors">
                                    "Solutions"
                                </a>
                            </li>
                        </ul>
                    </div>

                    // Company links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#company" class="text-sm text-theme-secondary hover:text-theme-primary transition-colors">
                                    "About"
                                </a>
                            </li>
                            <li>
                                <a href="mailto:contact@82labs.com" class="text-sm text-theme-secondary hover:text-theme-primary transition-colors">
                                    "Contact"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 82 Labs. All rights reserved."
                    </span>
                </div>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="82 Labs - Private and Secure AI" />

        // Basic meta tags
        <Meta name="description" content="82 Labs brings you cutting-edge multilingual models, advanced retrieval, and an AI workspace tailored for the modern enterprise, all within a single, secure platform." />
        <Meta name="keywords" content="private AI, secure AI, enterprise AI, multilingual models, retrieval, RAG, AI workspace" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://82labs.com/" />
        <Meta property="og:title" content="82 Labs - Private and Secure AI" />
        <Meta property="og:description" content="The all-in-one platform for private and secure AI." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://82labs.com/" />
        <Meta property="twitter:title" content="82 Labs - Private and Secure AI" />
        <Meta property="twitter:description" content="The all-in-one platform for private and secure AI." />

        // Canonical URL
        <Link rel="canonical" href="https://82labs.com/" />
    }
}

/// CSS styles for home page animations
#[component]
fn HomeStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Button styles */
            .minimal-button {
                padding: 0.625rem 1.25rem;
                font-weight: 600;
                border-radius: 0.5rem;
                transition: all 0.3s;
                cursor: pointer;
            }
            .minimal-button-primary {
                color: white;
                background-color: #111827;
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
            }
            .minimal-button-primary:hover {
                transform: scale(1.03);
                background-color: #1f2937;
            }
            .minimal-button-primary:disabled {
                opacity: 0.6;
                transform: none;
                cursor: not-allowed;
            }
            .dark .minimal-button-primary {
                background-color: #f97316;
            }
            .dark .minimal-button-primary:hover {
                background-color: #ea580c;
            }

            /* Card */
            .minimal-card {
                border-radius: 0.75rem;
                padding: 1.5rem;
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
            }

            /* Model tabs */
            .tab-active {
                color: var(--color-text-primary);
                border-bottom: 2px solid currentColor;
                margin-bottom: -2px;
            }
            .tab-inactive {
                color: var(--color-text-secondary);
            }
            .tab-inactive:hover {
                color: var(--color-text-primary);
            }

            /* Entry animations for the hero */
            @keyframes home-fade-in {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .home-fade-in {
                animation: home-fade-in 0.6s ease-out forwards;
            }

            .home-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .home-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll reveal */
            .reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .reveal.revealed {
                opacity: 1;
                transform: translateY(0);
            }

            .stagger-item {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }

            .stagger-item.animate {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                if (entry.target.classList.contains('reveal')) {
                                    entry.target.classList.add('revealed');
                                } else {
                                    entry.target.classList.add('animate');
                                }
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.reveal, .stagger-item').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
