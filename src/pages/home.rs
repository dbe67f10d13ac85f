use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::counter::StatCounter;
use crate::components::matrix_rain::MatrixRain;
use crate::components::neural_network::NeuralNetwork;
use crate::components::newsletter::NewsletterForm;
use crate::components::reveal::{Reveal, RevealEffect};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Receives the fragment of a clicked in-page link, e.g. `"#articles"`.
    pub on_navigate: Callback<AttrValue>,
}

#[derive(Properties, PartialEq)]
struct CategoryCardProps {
    icon: AttrValue,
    name: AttrValue,
    blurb: AttrValue,
}

#[function_component(CategoryCard)]
fn category_card(props: &CategoryCardProps) -> Html {
    // mouseenter does not bubble, so the target is always the card itself.
    let onmouseenter = Callback::from(|e: MouseEvent| {
        let card: HtmlElement = e.target_unchecked_into();
        let _ = card
            .style()
            .set_property("transform", "scale(1.05) rotate(2deg)");
    });
    let onmouseleave = Callback::from(|e: MouseEvent| {
        let card: HtmlElement = e.target_unchecked_into();
        let _ = card
            .style()
            .set_property("transform", "scale(1) rotate(0deg)");
    });

    html! {
        <div class="category-card" {onmouseenter} {onmouseleave}>
            <div class="category-icon">{ props.icon.clone() }</div>
            <h3>{ props.name.clone() }</h3>
            <p>{ props.blurb.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ArticleCardProps {
    tag: AttrValue,
    title: AttrValue,
    excerpt: AttrValue,
    date: AttrValue,
}

#[function_component(ArticleCard)]
fn article_card(props: &ArticleCardProps) -> Html {
    html! {
        <article class="article-card">
            <span class="article-tag">{ props.tag.clone() }</span>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.excerpt.clone() }</p>
            <span class="article-date">{ props.date.clone() }</span>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    initials: AttrValue,
    name: AttrValue,
    role: AttrValue,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let avatar = use_node_ref();

    let onmouseenter = {
        let avatar = avatar.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(avatar) = avatar.cast::<Element>() {
                let _ = avatar.class_list().add_1("animate-spin");
                Timeout::new(1000, move || {
                    let _ = avatar.class_list().remove_1("animate-spin");
                })
                .forget();
            }
        })
    };

    html! {
        <div class="team-card" {onmouseenter}>
            <div ref={avatar} class="team-avatar">{ props.initials.clone() }</div>
            <h3>{ props.name.clone() }</h3>
            <p class="team-role">{ props.role.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SocialLinkProps {
    label: AttrValue,
    glyph: AttrValue,
}

#[function_component(SocialLink)]
fn social_link(props: &SocialLinkProps) -> Html {
    let onmouseenter = Callback::from(|e: MouseEvent| {
        let link: HtmlElement = e.target_unchecked_into();
        let _ = link
            .style()
            .set_property("transform", "scale(1.1) rotate(5deg)");
    });
    let onmouseleave = Callback::from(|e: MouseEvent| {
        let link: HtmlElement = e.target_unchecked_into();
        let _ = link.style().set_property("transform", "scale(1)");
    });

    html! {
        <a
            href="#"
            class="social-link"
            aria-label={props.label.clone()}
            {onmouseenter}
            {onmouseleave}
            onclick={Callback::from(|e: MouseEvent| e.prevent_default())}
        >
            { props.glyph.clone() }
        </a>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Land at the top on every arrival, including back/forward restores. A
    // late layout shift can undo the first reset, hence the delayed second.
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                window.scroll_to_with_x_and_y(0.0, 0.0);

                let delayed = window.clone();
                Timeout::new(100, move || {
                    delayed.scroll_to_with_x_and_y(0.0, 0.0);
                })
                .forget();

                let on_show = window.clone();
                let pageshow = Closure::wrap(Box::new(move || {
                    on_show.scroll_to_with_x_and_y(0.0, 0.0);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("pageshow", pageshow.as_ref().unchecked_ref())
                    .unwrap();

                let on_leave = window.clone();
                let beforeunload = Closure::wrap(Box::new(move || {
                    on_leave.scroll_to_with_x_and_y(0.0, 0.0);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "beforeunload",
                        beforeunload.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "pageshow",
                            pageshow.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "beforeunload",
                            beforeunload.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The headline's typing animation starts paused so it never plays against
    // an unstyled page.
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(headline) = document.query_selector(".typewriter").ok().flatten() {
                    if let Ok(headline) = headline.dyn_into::<HtmlElement>() {
                        let _ = headline
                            .style()
                            .set_property("animation-play-state", "running");
                    }
                }
                || ()
            },
            (),
        );
    }

    // Articles drift gently, each joining in at a random moment with a random
    // phase so the grid never bobs in unison.
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Ok(articles) = document.query_selector_all("article") {
                    for index in 0..articles.length() {
                        let article = articles
                            .item(index)
                            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
                        if let Some(article) = article {
                            let wait = (js_sys::Math::random() * 2000.0) as u32;
                            Timeout::new(wait, move || {
                                let phase = format!("{:.3}s", js_sys::Math::random() * 2.0);
                                let _ = article.style().set_property("animation-delay", &phase);
                                let _ = article.class_list().add_1("floating");
                            })
                            .forget();
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    let nav_to = {
        let on_navigate = props.on_navigate.clone();
        move |fragment: &'static str| {
            let on_navigate = on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(AttrValue::from(fragment));
            })
        }
    };

    html! {
        <main class="page">
            <header id="home" class="hero">
                <MatrixRain />
                <NeuralNetwork />
                <div class="hero-content">
                    <h1 class="typewriter">{"Tomorrow's Intelligence, Today's Briefing"}</h1>
                    <p class="hero-subtitle">
                        {"Neural Pulse tracks the models, the labs and the breakthroughs \
                          shaping machine intelligence, and explains why they matter."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#articles" class="hero-cta" onclick={nav_to("#articles")}>
                            {"Explore Articles"}
                        </a>
                        <a href="#newsletter" class="hero-cta secondary" onclick={nav_to("#newsletter")}>
                            {"Get the Newsletter"}
                        </a>
                    </div>
                </div>
            </header>

            <section class="stats">
                <Reveal effect={RevealEffect::FadeIn}>
                    <div class="stats-grid">
                        <StatCounter target={25_000} suffix="+" label="Articles Published" />
                        <StatCounter target={1_200_000} label="Monthly Readers" />
                        <StatCounter target={85_000} suffix="+" label="Newsletter Subscribers" />
                        <StatCounter target={450} label="Models Tracked" />
                    </div>
                </Reveal>
            </section>

            <section id="categories" class="section">
                <Reveal effect={RevealEffect::FadeIn}>
                    <div class="section-header">
                        <h2>{"Coverage Areas"}</h2>
                        <p>{"Four desks, one obsession: how machine intelligence is built and used."}</p>
                    </div>
                </Reveal>
                <div class="category-grid">
                    <Reveal effect={RevealEffect::SlideInLeft}>
                        <CategoryCard
                            icon="🧠"
                            name="Machine Learning"
                            blurb="Architectures, training runs and the scaling frontier."
                        />
                    </Reveal>
                    <Reveal effect={RevealEffect::ScaleIn}>
                        <CategoryCard
                            icon="💬"
                            name="Language Models"
                            blurb="Chatbots, agents and everything transformer-shaped."
                        />
                    </Reveal>
                    <Reveal effect={RevealEffect::ScaleIn}>
                        <CategoryCard
                            icon="🤖"
                            name="Robotics"
                            blurb="Embodied intelligence from warehouse floors to Mars."
                        />
                    </Reveal>
                    <Reveal effect={RevealEffect::SlideInRight}>
                        <CategoryCard
                            icon="⚖️"
                            name="AI Policy"
                            blurb="Regulation, safety and the governance of thinking machines."
                        />
                    </Reveal>
                </div>
            </section>

            <section id="articles" class="section">
                <Reveal effect={RevealEffect::FadeIn}>
                    <div class="section-header">
                        <h2>{"Latest Articles"}</h2>
                        <p>{"What the desks filed this month."}</p>
                    </div>
                </Reveal>
                <div class="article-grid">
                    <Reveal effect={RevealEffect::FadeIn}>
                        <ArticleCard
                            tag="Research"
                            title="Sparse Mixture Models Hit a New Efficiency Ceiling"
                            excerpt="A Zurich lab squeezed frontier-class reasoning into a model \
                                     that runs on a single workstation GPU."
                            date="Aug 18, 2026"
                        />
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeIn}>
                        <ArticleCard
                            tag="Industry"
                            title="The Quiet Race for On-Device Inference"
                            excerpt="Phone makers are shipping NPUs faster than developers can \
                                     fill them. We mapped who is actually using the silicon."
                            date="Aug 12, 2026"
                        />
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeIn}>
                        <ArticleCard
                            tag="Explainer"
                            title="What Watermarking Can and Cannot Prove"
                            excerpt="Detection schemes promise provenance for generated media. \
                                     The math says: only under assumptions nobody can enforce."
                            date="Aug 5, 2026"
                        />
                    </Reveal>
                </div>
            </section>

            <section id="about" class="section">
                <Reveal effect={RevealEffect::FadeIn} bottom_inset_px={100}>
                    <div class="section-header">
                        <h2>{"About Neural Pulse"}</h2>
                        <p>{"Reporters and researchers reading the papers so you don't have to. \
                             Independent, sceptical, and occasionally impressed."}</p>
                    </div>
                </Reveal>
                <div class="team-grid">
                    <Reveal effect={RevealEffect::ScaleIn} bottom_inset_px={100}>
                        <TeamCard initials="MK" name="Mika Korhonen" role="Editor-in-Chief" />
                    </Reveal>
                    <Reveal effect={RevealEffect::ScaleIn} bottom_inset_px={100}>
                        <TeamCard initials="AS" name="Amara Sow" role="Research Desk" />
                    </Reveal>
                    <Reveal effect={RevealEffect::ScaleIn} bottom_inset_px={100}>
                        <TeamCard initials="JP" name="Jonas Petit" role="Industry Desk" />
                    </Reveal>
                </div>
            </section>

            <section id="newsletter" class="section newsletter">
                <Reveal effect={RevealEffect::FadeIn}>
                    <div class="section-header">
                        <h2>{"Stay in the Loop"}</h2>
                        <p>{"One email a week. The five stories that mattered, and why."}</p>
                    </div>
                    <NewsletterForm />
                </Reveal>
            </section>

            <section id="contact" class="section">
                <Reveal effect={RevealEffect::FadeIn} bottom_inset_px={100}>
                    <div class="section-header">
                        <h2>{"Talk to Us"}</h2>
                        <p>{"Tips, corrections, partnerships: the desk reads everything."}</p>
                    </div>
                </Reveal>
                <div class="contact-cards">
                    <Reveal effect={RevealEffect::FadeIn} bottom_inset_px={100} stagger_cards={true}>
                        <div class="contact-tile">
                            <span class="tile-icon">{"📬"}</span>
                            <h3>{"Editorial"}</h3>
                            <p>{"hello@neuralpulse.example"}</p>
                        </div>
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeIn} bottom_inset_px={100} stagger_cards={true}>
                        <div class="contact-tile">
                            <span class="tile-icon">{"🤝"}</span>
                            <h3>{"Partnerships"}</h3>
                            <p>{"partners@neuralpulse.example"}</p>
                        </div>
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeIn} bottom_inset_px={100} stagger_cards={true}>
                        <div class="contact-tile">
                            <span class="tile-icon">{"🛠️"}</span>
                            <h3>{"Support"}</h3>
                            <p>{"support@neuralpulse.example"}</p>
                        </div>
                    </Reveal>
                </div>
                <Reveal effect={RevealEffect::FadeIn} bottom_inset_px={100}>
                    <div class="contact-form-wrap">
                        <ContactForm />
                    </div>
                </Reveal>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h2>{"Neural Pulse"}</h2>
                        <p>{"Independent reporting on machine intelligence since 2021."}</p>
                    </div>
                    <div class="footer-links">
                        <h3>{"Sections"}</h3>
                        <a href="#home" onclick={nav_to("#home")}>{"Home"}</a>
                        <a href="#categories" onclick={nav_to("#categories")}>{"Categories"}</a>
                        <a href="#articles" onclick={nav_to("#articles")}>{"Articles"}</a>
                        <a href="#about" onclick={nav_to("#about")}>{"About"}</a>
                        <a href="#contact" onclick={nav_to("#contact")}>{"Contact"}</a>
                    </div>
                    <div class="footer-social">
                        <h3>{"Follow"}</h3>
                        <div class="social-row">
                            <SocialLink label="X" glyph="𝕏" />
                            <SocialLink label="LinkedIn" glyph="in" />
                            <SocialLink label="RSS" glyph="📡" />
                        </div>
                    </div>
                </div>
                <p class="copyright">{"© 2026 Neural Pulse. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                    .page {
                        background: var(--bg);
                        color: var(--text);
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        min-height: 85vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                        background: linear-gradient(160deg, #0f172a 0%, #1e3a8a 60%, #312e81 100%);
                        color: #f1f5f9;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 2;
                        max-width: 800px;
                        padding: 2rem;
                    }
                    .typewriter {
                        display: inline-block;
                        max-width: 100%;
                        overflow: hidden;
                        white-space: nowrap;
                        border-right: 3px solid rgba(241, 245, 249, 0.75);
                        font-size: clamp(1.4rem, 3.5vw, 2.6rem);
                        width: 0;
                        animation: typing 3s steps(41, end) forwards,
                                   caret 0.8s step-end infinite;
                        animation-play-state: paused;
                    }
                    @keyframes typing {
                        from { width: 0; }
                        to { width: 100%; }
                    }
                    @keyframes caret {
                        0%, 100% { border-color: transparent; }
                        50% { border-color: rgba(241, 245, 249, 0.75); }
                    }
                    .hero-subtitle {
                        margin: 1.5rem auto 2rem;
                        max-width: 600px;
                        font-size: 1.1rem;
                        color: rgba(241, 245, 249, 0.85);
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta {
                        padding: 0.8rem 1.6rem;
                        border-radius: 999px;
                        background: var(--accent);
                        color: #fff;
                        text-decoration: none;
                        font-weight: 600;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: translateY(-2px);
                    }
                    .hero-cta.secondary {
                        background: transparent;
                        border: 1px solid rgba(241, 245, 249, 0.5);
                    }

                    /* Sections */
                    .section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-header h2 {
                        font-size: 2rem;
                        margin-bottom: 0.5rem;
                    }
                    .section-header p {
                        color: var(--muted);
                    }

                    /* Stats */
                    .stats {
                        background: var(--surface);
                        border-bottom: 1px solid var(--border);
                        padding: 3.5rem 1.5rem;
                    }
                    .stats-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-number {
                        font-size: 2.2rem;
                        font-weight: 700;
                        color: var(--accent);
                    }
                    .stat-label {
                        margin-top: 0.25rem;
                        color: var(--muted);
                    }

                    /* Categories */
                    .category-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .category-card {
                        background: var(--surface);
                        border: 1px solid var(--border);
                        border-radius: 14px;
                        padding: 2rem 1.5rem;
                        text-align: center;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                        cursor: pointer;
                    }
                    .category-card:hover {
                        box-shadow: 0 16px 32px rgba(15, 23, 42, 0.12);
                    }
                    .category-icon {
                        font-size: 2.4rem;
                        margin-bottom: 0.75rem;
                    }
                    .category-card p {
                        margin-top: 0.5rem;
                        color: var(--muted);
                        font-size: 0.95rem;
                    }

                    /* Articles */
                    .article-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .article-card {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        background: var(--surface);
                        border: 1px solid var(--border);
                        border-radius: 14px;
                        padding: 1.75rem;
                        height: 100%;
                    }
                    .article-tag {
                        align-self: flex-start;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.06em;
                        text-transform: uppercase;
                        color: var(--accent);
                    }
                    .article-card p {
                        color: var(--muted);
                        flex: 1;
                    }
                    .article-date {
                        font-size: 0.85rem;
                        color: var(--muted);
                    }

                    /* Team */
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        text-align: center;
                    }
                    .team-card {
                        background: var(--surface);
                        border: 1px solid var(--border);
                        border-radius: 14px;
                        padding: 2rem 1.5rem;
                    }
                    .team-avatar {
                        width: 72px;
                        height: 72px;
                        margin: 0 auto 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #2563eb, #7c3aed);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.3rem;
                    }
                    .team-role {
                        color: var(--muted);
                        font-size: 0.9rem;
                    }

                    /* Newsletter + contact */
                    .newsletter {
                        text-align: center;
                    }
                    .contact-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .contact-tile {
                        background: var(--surface);
                        border: 1px solid var(--border);
                        border-radius: 14px;
                        padding: 1.75rem;
                        text-align: center;
                    }
                    .tile-icon {
                        font-size: 1.8rem;
                    }
                    .contact-tile p {
                        color: var(--muted);
                        margin-top: 0.35rem;
                    }
                    .contact-form-wrap {
                        max-width: 640px;
                        margin: 0 auto;
                    }

                    /* Footer */
                    .footer {
                        background: var(--surface);
                        border-top: 1px solid var(--border);
                        padding: 3.5rem 1.5rem 1.5rem;
                    }
                    .footer-content {
                        max-width: 1100px;
                        margin: 0 auto 2rem;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                    }
                    @media (max-width: 767px) {
                        .footer-content {
                            grid-template-columns: 1fr;
                        }
                    }
                    .footer-brand p {
                        color: var(--muted);
                        margin-top: 0.5rem;
                    }
                    .footer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .footer-links a {
                        color: var(--muted);
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: var(--accent);
                    }
                    .social-row {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 0.5rem;
                    }
                    .social-link {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 42px;
                        height: 42px;
                        border-radius: 50%;
                        background: var(--bg);
                        border: 1px solid var(--border);
                        color: var(--text);
                        text-decoration: none;
                        font-weight: 700;
                        transition: transform 0.2s ease;
                    }
                    .copyright {
                        text-align: center;
                        color: var(--muted);
                        font-size: 0.85rem;
                    }

                    /* Scroll-reveal entrances */
                    .fade-in {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .slide-in-left {
                        opacity: 0;
                        transform: translateX(-40px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .slide-in-right {
                        opacity: 0;
                        transform: translateX(40px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .scale-in {
                        opacity: 0;
                        transform: scale(0.9);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible,
                    .slide-in-left.visible,
                    .slide-in-right.visible,
                    .scale-in.visible {
                        opacity: 1;
                        transform: none;
                    }

                    /* Marker animations */
                    .animate-bounce {
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% {
                            transform: translateY(-8%);
                            animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
                        }
                        50% {
                            transform: translateY(0);
                            animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
                        }
                    }
                    .animate-pulse {
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .animate-spin {
                        animation: spin 1s linear;
                    }
                    @keyframes spin {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }
                    .floating {
                        animation: float 4s ease-in-out infinite;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-8px); }
                    }
                "#}
            </style>
        </main>
    }
}
