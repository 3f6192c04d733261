//! SEO metadata generation.
//!
//! Produces the per-locale, per-page head metadata: title, description,
//! canonical URL, hreflang alternates, Open Graph and Twitter card fields.
//! Canonical and alternate URLs come from [`RouteAlternates`], the same
//! source the sitemap uses.

use crate::html::escape;
use crate::i18n::{Locale, LocaleTable, Page, RouteAlternates};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::OnceLock;

pub const SITE_NAME: &str = "Ivan Tech Coach";
pub const OG_IMAGE_PATH: &str = "/images/branding/og-cover.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const TWITTER_CREATOR: &str = "@ivantechcoach";

#[derive(Debug, Clone, Copy)]
struct PageCopy {
    title: &'static str,
    description: &'static str,
}

/// Localized SEO copy for one locale
#[derive(Debug, Clone)]
struct SeoCopy {
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    og_title: &'static str,
    og_description: &'static str,
    og_image_alt: &'static str,
    twitter_title: &'static str,
    twitter_description: &'static str,
    twitter_image_alt: &'static str,
    about: PageCopy,
    services: PageCopy,
    portfolio: PageCopy,
    blog: PageCopy,
    contact: PageCopy,
}

impl SeoCopy {
    fn page(&self, page: Page) -> Option<PageCopy> {
        match page {
            Page::Home => None,
            Page::About => Some(self.about),
            Page::Services => Some(self.services),
            Page::Portfolio => Some(self.portfolio),
            Page::Blog => Some(self.blog),
            Page::Contact => Some(self.contact),
        }
    }
}

/// Open Graph fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locale: &'static str,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: &'static str,
    pub image: OgImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Twitter card fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    pub creator: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

/// Metadata bundle for one page in one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMetadata {
    pub locale: Locale,
    /// BCP-47 tag for `<html lang>`
    pub html_lang: &'static str,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    /// Hreflang tag (and `x-default`) to absolute URL
    pub alternates: BTreeMap<String, String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

/// Generate metadata for `page` (home when `None`) in `locale`.
pub fn generate_metadata(site_url: &str, locale: Locale, page: Option<Page>) -> SeoMetadata {
    let page = page.unwrap_or(Page::Home);
    let copy = seo_copy(locale);
    let alternates = RouteAlternates::for_path(site_url, page.bare_path());
    let canonical_url = alternates
        .get(locale)
        .map(|link| link.url.clone())
        .expect("alternates contain every locale");

    let (title, description, og_title, og_description, twitter_title, twitter_description) =
        match copy.page(page) {
            Some(page_copy) => (
                page_copy.title,
                page_copy.description,
                page_copy.title,
                page_copy.description,
                page_copy.title,
                page_copy.description,
            ),
            None => (
                copy.title,
                copy.description,
                copy.og_title,
                copy.og_description,
                copy.twitter_title,
                copy.twitter_description,
            ),
        };

    let image_url = format!("{}{}", site_url, OG_IMAGE_PATH);

    SeoMetadata {
        locale,
        html_lang: locale.html_lang(),
        title: title.to_string(),
        description: description.to_string(),
        keywords: copy.keywords.iter().map(|k| k.to_string()).collect(),
        open_graph: OpenGraph {
            kind: "website",
            locale: locale.og_locale(),
            url: canonical_url.clone(),
            title: og_title.to_string(),
            description: og_description.to_string(),
            site_name: SITE_NAME,
            image: OgImage {
                url: image_url.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: copy.og_image_alt.to_string(),
            },
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: twitter_title.to_string(),
            description: twitter_description.to_string(),
            image: image_url,
            image_alt: copy.twitter_image_alt.to_string(),
            creator: TWITTER_CREATOR,
        },
        robots: Robots {
            index: true,
            follow: true,
        },
        canonical_url,
        alternates: alternates.hreflang_map(),
    }
}

impl SeoMetadata {
    /// Render the `<head>` tags for this bundle.
    pub fn to_head_html(&self) -> String {
        let mut html = String::new();
        let robots = match (self.robots.index, self.robots.follow) {
            (true, true) => "index, follow",
            (true, false) => "index, nofollow",
            (false, true) => "noindex, follow",
            (false, false) => "noindex, nofollow",
        };

        // Writing to a String cannot fail.
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        let _ = writeln!(html, r#"<meta name="description" content="{}">"#, escape(&self.description));
        let _ = writeln!(html, r#"<meta name="keywords" content="{}">"#, escape(&self.keywords.join(", ")));
        let _ = writeln!(html, r#"<meta name="robots" content="{}">"#, robots);
        let _ = writeln!(html, r#"<link rel="canonical" href="{}">"#, escape(&self.canonical_url));
        for (hreflang, url) in &self.alternates {
            let _ = writeln!(
                html,
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                escape(hreflang),
                escape(url)
            );
        }

        let og = &self.open_graph;
        for (property, content) in [
            ("og:type", og.kind.to_string()),
            ("og:locale", og.locale.to_string()),
            ("og:url", og.url.clone()),
            ("og:title", og.title.clone()),
            ("og:description", og.description.clone()),
            ("og:site_name", og.site_name.to_string()),
            ("og:image", og.image.url.clone()),
            ("og:image:width", og.image.width.to_string()),
            ("og:image:height", og.image.height.to_string()),
            ("og:image:alt", og.image.alt.clone()),
        ] {
            let _ = writeln!(
                html,
                r#"<meta property="{}" content="{}">"#,
                property,
                escape(&content)
            );
        }
        for link in self.alternates_except_current() {
            let _ = writeln!(
                html,
                r#"<meta property="og:locale:alternate" content="{}">"#,
                link
            );
        }

        let tw = &self.twitter;
        for (name, content) in [
            ("twitter:card", tw.card),
            ("twitter:title", tw.title.as_str()),
            ("twitter:description", tw.description.as_str()),
            ("twitter:image", tw.image.as_str()),
            ("twitter:image:alt", tw.image_alt.as_str()),
            ("twitter:creator", tw.creator),
        ] {
            let _ = writeln!(html, r#"<meta name="{}" content="{}">"#, name, escape(content));
        }

        html
    }

    fn alternates_except_current(&self) -> Vec<&'static str> {
        Locale::all()
            .into_iter()
            .filter(|locale| *locale != self.locale)
            .map(|locale| locale.og_locale())
            .collect()
    }
}

static SEO_COPY: OnceLock<LocaleTable<&'static SeoCopy>> = OnceLock::new();

fn seo_copy(locale: Locale) -> &'static SeoCopy {
    SEO_COPY
        .get_or_init(|| {
            LocaleTable::new(vec![
                (Locale::CATALAN, &CATALAN_SEO),
                (Locale::SPANISH, &SPANISH_SEO),
                (Locale::ENGLISH, &ENGLISH_SEO),
            ])
            .expect("SEO copy covers every locale")
        })
        .get(locale)
}

// ==================== Catalan Copy ====================

const CATALAN_SEO: SeoCopy = SeoCopy {
    title: "Ivan Tech Coach - Coaching Tecnològic Professional | Transforma la Teva Carrera",
    description: "Transforma la teva carrera tecnològica amb coaching personalitzat. Aprèn les habilitats més demandades del mercat i accelera el teu creixement professional amb Ivan Tech Coach. Sessió gratuïta!",
    keywords: &[
        "coaching tecnològic",
        "mentoria tecnològica",
        "carrera professional",
        "desenvolupament web",
        "programació",
        "devops",
        "ciberseguretat",
        "intel·ligència artificial",
        "lideratge tècnic",
        "transformació digital",
        "coaching personalitzat",
        "mentor professional",
        "cursos tecnològics",
        "formació IT",
    ],
    og_title: "Ivan Tech Coach - Coaching Tecnològic Professional",
    og_description: "Transforma la teva carrera tecnològica amb coaching personalitzat. Aprèn les habilitats més demandades del mercat i accelera el teu creixement professional.",
    og_image_alt: "Ivan Tech Coach - Coaching Tecnològic Professional - Transforma la teva carrera tecnològica",
    twitter_title: "Ivan Tech Coach - Coaching Tecnològic Professional",
    twitter_description: "Transforma la teva carrera tecnològica amb coaching personalitzat. Aprèn les habilitats més demandades del mercat.",
    twitter_image_alt: "Ivan Tech Coach - Coaching Tecnològic Professional",
    about: PageCopy {
        title: "Sobre Mi - Ivan Tech Coach | Experiència i Metodologia",
        description: "Coneix la meva experiència de més de 5 anys en coaching tecnològic. Descobreix la meva metodologia personalitzada i com puc ajudar-te a accelerar la teva carrera professional.",
    },
    services: PageCopy {
        title: "Serveis - Ivan Tech Coach | Coaching Tecnològic Personalitzat",
        description: "Descobreix els meus serveis de coaching tecnològic: desenvolupament web, DevOps, ciberseguretat, IA i lideratge tècnic. Metodologia personalitzada i resultats garantits.",
    },
    portfolio: PageCopy {
        title: "Portfolio - Ivan Tech Coach | Casos d'Èxit i Projectes",
        description: "Explora el meu portfolio amb casos d'èxit de professionals que han transformat les seves carreres tecnològiques amb el meu coaching personalitzat.",
    },
    blog: PageCopy {
        title: "Blog - Ivan Tech Coach | Articles sobre Tecnologia i Carrera",
        description: "Llegeix els meus articles sobre tecnologia, carrera professional i desenvolupament personal. Consells pràctics i tendències del sector tecnològic.",
    },
    contact: PageCopy {
        title: "Contacte - Ivan Tech Coach | Agenda la Teva Sessió Gratuïta",
        description: "Contacta amb mi per agendar la teva sessió diagnòstica gratuïta. Descobreix com puc ajudar-te a transformar la teva carrera tecnològica.",
    },
};

// ==================== Spanish Copy ====================

const SPANISH_SEO: SeoCopy = SeoCopy {
    title: "Ivan Tech Coach - Coaching Tecnológico Profesional | Transforma tu Carrera",
    description: "Transforma tu carrera tecnológica con coaching personalizado. Aprende las habilidades más demandadas del mercado y acelera tu crecimiento profesional con Ivan Tech Coach. ¡Sesión gratuita!",
    keywords: &[
        "coaching tecnológico",
        "mentoría tecnológica",
        "carrera profesional",
        "desarrollo web",
        "programación",
        "devops",
        "ciberseguridad",
        "inteligencia artificial",
        "liderazgo técnico",
        "transformación digital",
        "coaching personalizado",
        "mentor profesional",
        "cursos tecnológicos",
        "formación IT",
    ],
    og_title: "Ivan Tech Coach - Coaching Tecnológico Profesional",
    og_description: "Transforma tu carrera tecnológica con coaching personalizado. Aprende las habilidades más demandadas del mercado y acelera tu crecimiento profesional.",
    og_image_alt: "Ivan Tech Coach - Coaching Tecnológico Profesional - Transforma tu carrera tecnológica",
    twitter_title: "Ivan Tech Coach - Coaching Tecnológico Profesional",
    twitter_description: "Transforma tu carrera tecnológica con coaching personalizado. Aprende las habilidades más demandadas del mercado.",
    twitter_image_alt: "Ivan Tech Coach - Coaching Tecnológico Profesional",
    about: PageCopy {
        title: "Sobre Mí - Ivan Tech Coach | Experiencia y Metodología",
        description: "Conoce mi experiencia de más de 5 años en coaching tecnológico. Descubre mi metodología personalizada y cómo puedo ayudarte a acelerar tu carrera profesional.",
    },
    services: PageCopy {
        title: "Servicios - Ivan Tech Coach | Coaching Tecnológico Personalizado",
        description: "Descubre mis servicios de coaching tecnológico: desarrollo web, DevOps, ciberseguridad, IA y liderazgo técnico. Metodología personalizada y resultados garantizados.",
    },
    portfolio: PageCopy {
        title: "Portfolio - Ivan Tech Coach | Casos de Éxito y Proyectos",
        description: "Explora mi portfolio con casos de éxito de profesionales que han transformado sus carreras tecnológicas con mi coaching personalizado.",
    },
    blog: PageCopy {
        title: "Blog - Ivan Tech Coach | Artículos sobre Tecnología y Carrera",
        description: "Lee mis artículos sobre tecnología, carrera profesional y desarrollo personal. Consejos prácticos y tendencias del sector tecnológico.",
    },
    contact: PageCopy {
        title: "Contacto - Ivan Tech Coach | Agenda tu Sesión Gratuita",
        description: "Contacta conmigo para agendar tu sesión diagnóstica gratuita. Descubre cómo puedo ayudarte a transformar tu carrera tecnológica.",
    },
};

// ==================== English Copy ====================

const ENGLISH_SEO: SeoCopy = SeoCopy {
    title: "Ivan Tech Coach - Professional Technology Coaching | Transform Your Career",
    description: "Transform your technology career with personalized coaching. Learn the most in-demand skills in the market and accelerate your professional growth with Ivan Tech Coach. Free session!",
    keywords: &[
        "technology coaching",
        "tech mentorship",
        "professional career",
        "web development",
        "programming",
        "devops",
        "cybersecurity",
        "artificial intelligence",
        "technical leadership",
        "digital transformation",
        "personalized coaching",
        "professional mentor",
        "technology courses",
        "IT training",
    ],
    og_title: "Ivan Tech Coach - Professional Technology Coaching",
    og_description: "Transform your technology career with personalized coaching. Learn the most in-demand skills in the market and accelerate your professional growth.",
    og_image_alt: "Ivan Tech Coach - Professional Technology Coaching - Transform your tech career",
    twitter_title: "Ivan Tech Coach - Professional Technology Coaching",
    twitter_description: "Transform your technology career with personalized coaching. Learn the most in-demand skills in the market.",
    twitter_image_alt: "Ivan Tech Coach - Professional Technology Coaching",
    about: PageCopy {
        title: "About Me - Ivan Tech Coach | Experience and Methodology",
        description: "Learn about my over 5 years of experience in technology coaching. Discover my personalized methodology and how I can help you accelerate your professional career.",
    },
    services: PageCopy {
        title: "Services - Ivan Tech Coach | Personalized Technology Coaching",
        description: "Discover my technology coaching services: web development, DevOps, cybersecurity, AI and technical leadership. Personalized methodology and guaranteed results.",
    },
    portfolio: PageCopy {
        title: "Portfolio - Ivan Tech Coach | Success Cases and Projects",
        description: "Explore my portfolio with success cases of professionals who have transformed their technology careers with my personalized coaching.",
    },
    blog: PageCopy {
        title: "Blog - Ivan Tech Coach | Articles about Technology and Career",
        description: "Read my articles about technology, professional career and personal development. Practical tips and technology sector trends.",
    },
    contact: PageCopy {
        title: "Contact - Ivan Tech Coach | Schedule your Free Session",
        description: "Contact me to schedule your free diagnostic session. Discover how I can help you transform your technology career.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{resolve_locale, X_DEFAULT};

    const SITE: &str = "https://ivantechcoach.com";

    // ==================== Canonical Tests ====================

    #[test]
    fn test_canonical_home() {
        let meta = generate_metadata(SITE, Locale::SPANISH, None);
        assert_eq!(meta.canonical_url, "https://ivantechcoach.com/es");
        assert_eq!(meta.open_graph.url, meta.canonical_url);
    }

    #[test]
    fn test_canonical_page() {
        let meta = generate_metadata(SITE, Locale::CATALAN, Some(Page::Services));
        assert_eq!(meta.canonical_url, "https://ivantechcoach.com/cat/services");
    }

    #[test]
    fn test_home_page_equals_none() {
        assert_eq!(
            generate_metadata(SITE, Locale::ENGLISH, Some(Page::Home)),
            generate_metadata(SITE, Locale::ENGLISH, None)
        );
    }

    // ==================== Alternates Tests ====================

    #[test]
    fn test_alternates_complete_for_portfolio() {
        let meta = generate_metadata(SITE, Locale::ENGLISH, Some(Page::Portfolio));
        assert_eq!(meta.alternates.len(), Locale::all().len() + 1);

        for locale in Locale::all() {
            let url = &meta.alternates[locale.html_lang()];
            let path = url.strip_prefix(SITE).unwrap();
            assert_eq!(resolve_locale(path), locale);
            assert!(path.ends_with("/portfolio"));
        }
        assert_eq!(meta.alternates[X_DEFAULT], "https://ivantechcoach.com/cat/portfolio");
    }

    #[test]
    fn test_alternates_independent_of_current_locale() {
        let es = generate_metadata(SITE, Locale::SPANISH, Some(Page::Blog));
        let en = generate_metadata(SITE, Locale::ENGLISH, Some(Page::Blog));
        assert_eq!(es.alternates, en.alternates);
    }

    #[test]
    fn test_canonical_is_one_of_alternates() {
        for locale in Locale::all() {
            for page in Page::ALL {
                let meta = generate_metadata(SITE, locale, Some(page));
                assert_eq!(meta.alternates[locale.html_lang()], meta.canonical_url);
            }
        }
    }

    // ==================== Copy Tests ====================

    #[test]
    fn test_home_uses_distinct_og_copy() {
        let meta = generate_metadata(SITE, Locale::ENGLISH, None);
        assert!(meta.title.contains("Transform Your Career"));
        assert_eq!(meta.open_graph.title, "Ivan Tech Coach - Professional Technology Coaching");
        assert_eq!(meta.twitter.title, meta.open_graph.title);
    }

    #[test]
    fn test_page_copy_used_for_og_and_twitter() {
        let meta = generate_metadata(SITE, Locale::SPANISH, Some(Page::Contact));
        assert!(meta.title.starts_with("Contacto"));
        assert_eq!(meta.open_graph.title, meta.title);
        assert_eq!(meta.twitter.description, meta.description);
    }

    #[test]
    fn test_locale_representations() {
        let meta = generate_metadata(SITE, Locale::CATALAN, None);
        assert_eq!(meta.html_lang, "ca-ES");
        assert_eq!(meta.open_graph.locale, "ca_ES");
        assert!(meta.keywords.contains(&"coaching tecnològic".to_string()));
    }

    #[test]
    fn test_image_url_is_absolute() {
        let meta = generate_metadata(SITE, Locale::ENGLISH, None);
        assert_eq!(meta.open_graph.image.url, "https://ivantechcoach.com/images/branding/og-cover.jpg");
        assert_eq!(meta.twitter.image, meta.open_graph.image.url);
    }

    // ==================== Head HTML Tests ====================

    #[test]
    fn test_head_html_contains_links() {
        let head = generate_metadata(SITE, Locale::SPANISH, Some(Page::About)).to_head_html();
        assert!(head.contains(r#"<link rel="canonical" href="https://ivantechcoach.com/es/about">"#));
        assert!(head.contains(r#"hreflang="en-US" href="https://ivantechcoach.com/en/about""#));
        assert!(head.contains(r#"hreflang="x-default" href="https://ivantechcoach.com/cat/about""#));
        assert_eq!(head.matches(r#"rel="alternate""#).count(), 4);
    }

    #[test]
    fn test_head_html_escapes_copy() {
        let head = generate_metadata(SITE, Locale::CATALAN, Some(Page::Portfolio)).to_head_html();
        assert!(head.contains("Casos d&#39;Èxit"));
        assert!(!head.contains("Casos d'Èxit"));
    }

    #[test]
    fn test_head_html_og_locale_alternates() {
        let head = generate_metadata(SITE, Locale::ENGLISH, None).to_head_html();
        assert!(head.contains(r#"<meta property="og:locale" content="en_US">"#));
        assert!(head.contains(r#"<meta property="og:locale:alternate" content="ca_ES">"#));
        assert!(head.contains(r#"<meta property="og:locale:alternate" content="es_ES">"#));
    }

    #[test]
    fn test_metadata_serializes() {
        let json = serde_json::to_value(generate_metadata(SITE, Locale::ENGLISH, None)).unwrap();
        assert_eq!(json["locale"], "en");
        assert_eq!(json["open_graph"]["type"], "website");
        assert_eq!(json["alternates"]["x-default"], "https://ivantechcoach.com/cat");
    }
}
