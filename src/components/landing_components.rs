use leptos::prelude::*;

use crate::components::ThemeSwitcher;
use crate::theme::Theme;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "☁️",
        title: "Real-time Sync",
        description: "Your notes stay updated across all devices instantly. Work seamlessly between desktop and mobile.",
    },
    Feature {
        icon: "📝",
        title: "Rich Text Editor",
        description: "Format your notes with Markdown, add images, and create beautiful documents with our intuitive editor.",
    },
    Feature {
        icon: "🎵",
        title: "Music Integration",
        description: "Add ambient sounds or music to your notes. Perfect for setting the mood or enhancing focus.",
    },
    Feature {
        icon: "📊",
        title: "Instant Presentations",
        description: "Transform notes into shareable slides with one click. Share via URL for instant access.",
    },
];

struct Testimonial {
    content: &'static str,
    author: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        content: "Notedown's slide sharing feature has transformed how I present my ideas. It's incredibly intuitive.",
        author: "Sarah Chen",
        role: "Product Manager",
    },
    Testimonial {
        content: "I love how I can add music to my notes. It helps me stay focused and adds a new dimension to note-taking.",
        author: "Marcus Rodriguez",
        role: "Content Creator",
    },
    Testimonial {
        content: "The real-time sync is flawless. I can seamlessly switch between devices without missing a beat.",
        author: "Emily Parker",
        role: "Freelance Writer",
    },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class="fixed z-50 navbar bg-base-100/80 backdrop-blur-md">
            <div class="navbar-start">
                <a href="/" class="text-xl normal-case btn btn-ghost">"Notedown"</a>
            </div>
            <div class="hidden navbar-center lg:flex">
                <ul class="px-1 menu menu-horizontal">
                    <li><a href="#features">"Features"</a></li>
                    <li><a href="#testimonials">"Testimonials"</a></li>
                    <li><a href="#pricing">"Pricing"</a></li>
                </ul>
            </div>
            <div class="navbar-end gap-x-2">
                <a href="/auth/login" class="btn btn-ghost">"Login"</a>
                <a href="/auth/register" class="btn btn-primary">"Get Started"</a>
                <ThemeSwitcher theme/>
            </div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200 pt-16">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">
                        "Your Notes, " <span class="text-primary">"Elevated"</span>
                    </h1>
                    <p class="py-6">
                        "Transform your note-taking experience with rich text formatting, music integration, and instant slide sharing capabilities."
                    </p>
                    <div class="flex gap-4 justify-center">
                        <a href="/auth/register" class="btn btn-primary">"Get Started"</a>
                        <button class="btn btn-outline">"Watch Demo"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-24 bg-base-200">
            <div class="container mx-auto px-4">
                <div class="text-center">
                    <h2 class="text-4xl font-bold mb-4">"Features You'll Love"</h2>
                    <p class="text-lg text-base-content/70">
                        "Everything you need for better note-taking"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mt-16">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body items-center text-center">
                                        <div class="mb-4 text-3xl">{feature.icon}</div>
                                        <h3 class="card-title">{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-24">
            <div class="container px-4 mx-auto">
                <div class="mb-16 text-center">
                    <h2 class="mb-4 text-4xl font-bold">"What Users Say"</h2>
                    <p class="text-lg text-base-content/70">
                        "Join thousands of satisfied Notedown users"
                    </p>
                </div>
                <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <div class="shadow-xl card bg-base-100">
                                    <div class="card-body">
                                        <div class="mb-4 avatar placeholder">
                                            <div class="w-16 rounded-full bg-neutral text-neutral-content">
                                                <span class="text-2xl">"👤"</span>
                                            </div>
                                        </div>
                                        <p class="mb-4 italic">"“" {testimonial.content} "”"</p>
                                        <div>
                                            <h4 class="font-semibold">{testimonial.author}</h4>
                                            <p class="text-sm text-base-content/70">{testimonial.role}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-primary text-primary-content">
            <div class="container px-4 mx-auto text-center">
                <h2 class="mb-4 text-4xl font-bold">"Ready to Transform Your Notes?"</h2>
                <p class="mb-8 text-xl">
                    "Join thousands of users who've upgraded their note-taking experience"
                </p>
                <a href="/auth/register" class="btn btn-secondary btn-lg">
                    "Get Started for Free"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn LandingFooter() -> impl IntoView {
    view! {
        <footer class="footer p-10 bg-neutral text-neutral-content">
            <div>
                <span class="footer-title">"Product"</span>
                <a href="#features" class="link link-hover">"Features"</a>
                <a href="#pricing" class="link link-hover">"Pricing"</a>
                <a href="#" class="link link-hover">"Download"</a>
            </div>
            <div>
                <span class="footer-title">"Company"</span>
                <a href="#" class="link link-hover">"About"</a>
                <a href="#" class="link link-hover">"Blog"</a>
                <a href="#" class="link link-hover">"Careers"</a>
            </div>
            <div>
                <span class="footer-title">"Support"</span>
                <a href="#" class="link link-hover">"Help Center"</a>
                <a href="#" class="link link-hover">"Documentation"</a>
                <a href="#" class="link link-hover">"Contact"</a>
            </div>
            <div>
                <span class="footer-title">"Legal"</span>
                <a href="#" class="link link-hover">"Privacy"</a>
                <a href="#" class="link link-hover">"Terms"</a>
                <a href="#" class="link link-hover">"Security"</a>
            </div>
        </footer>
    }
}
