//! Localized user-facing strings.
//!
//! One const table per locale. Navigation hrefs are bare paths; they are
//! localized at render time through the link builder, never here.

/// A navigation entry for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Display name shown in the menu
    pub name: &'static str,

    /// Target bare path (no locale prefix)
    pub href: &'static str,

    /// Accessible label for screen readers
    pub aria_label: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct NavigationStrings {
    pub home: NavigationItem,
    pub about: NavigationItem,
    pub services: NavigationItem,
    pub portfolio: NavigationItem,
    pub blog: NavigationItem,
    pub contact: NavigationItem,
}

#[derive(Debug, Clone)]
pub struct UiStrings {
    pub skip_to_content: &'static str,
    pub toggle_menu: &'static str,
    pub select_language: &'static str,

    /// Accessible label for a language-switch control.
    /// Placeholders: {language}
    pub change_language: &'static str,

    pub main_navigation: &'static str,
    pub mobile_navigation: &'static str,
}

#[derive(Debug, Clone)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub secondary_cta: &'static str,
    pub trust_badge: &'static str,
    pub go_to_contact_label: &'static str,
    pub view_services_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct FooterStrings {
    pub description: &'static str,
    pub follow_us: &'static str,
    pub rights_reserved: &'static str,
    pub privacy_policy: &'static str,
    pub cookie_policy: &'static str,
    pub terms_of_use: &'static str,
}

#[derive(Debug, Clone)]
pub struct CookieStrings {
    pub title: &'static str,
    pub message: &'static str,
    pub accept_all: &'static str,
    pub accept_selected: &'static str,
    pub reject_all: &'static str,
    pub essential: &'static str,
    pub essential_description: &'static str,
    pub analytics: &'static str,
    pub analytics_description: &'static str,
    pub marketing: &'static str,
    pub marketing_description: &'static str,
    pub required: &'static str,
    pub optional: &'static str,
}

#[derive(Debug, Clone)]
pub struct NotFoundStrings {
    pub title: &'static str,
    pub message: &'static str,
    pub back_home: &'static str,
}

/// All localized user-facing strings for a locale
#[derive(Debug, Clone)]
pub struct SiteStrings {
    pub navigation: NavigationStrings,
    pub ui: UiStrings,
    pub hero: HeroStrings,
    pub footer: FooterStrings,
    pub cookies: CookieStrings,
    pub not_found: NotFoundStrings,
}

impl SiteStrings {
    /// Navigation items in menu order.
    pub fn navigation_items(&self) -> Vec<NavigationItem> {
        let nav = &self.navigation;
        vec![nav.home, nav.about, nav.services, nav.portfolio, nav.blog, nav.contact]
    }

    /// Render the change-language label for `language`.
    pub fn change_language_label(&self, language: &str) -> String {
        self.ui.change_language.replace("{language}", language)
    }
}

// ==================== Catalan Strings ====================

pub const CATALAN_STRINGS: SiteStrings = SiteStrings {
    navigation: NavigationStrings {
        home: NavigationItem { name: "Inici", href: "/", aria_label: Some("Anar a la pàgina principal") },
        about: NavigationItem { name: "Sobre mi", href: "/about", aria_label: Some("Anar a la pàgina sobre mi") },
        services: NavigationItem { name: "Serveis", href: "/services", aria_label: Some("Veure els meus serveis") },
        portfolio: NavigationItem { name: "Portafoli", href: "/portfolio", aria_label: Some("Veure el meu portafoli") },
        blog: NavigationItem { name: "Bloc", href: "/blog", aria_label: Some("Llegir el meu bloc") },
        contact: NavigationItem { name: "Contacte", href: "/contact", aria_label: Some("Pàgina de contacte") },
    },
    ui: UiStrings {
        skip_to_content: "Saltar al contingut",
        toggle_menu: "Obrir menú de navegació",
        select_language: "Seleccionar idioma",
        change_language: "Canviar a {language}",
        main_navigation: "Navegació principal",
        mobile_navigation: "Navegació mòbil",
    },
    hero: HeroStrings {
        title: "El teu Coach Tecnològic Personal",
        subtitle: "Aprèn a usar tecnologia, ciberseguretat i IA sense por ni complicacions. T'acompanyo pas a pas, amb paciència i claredat.",
        cta: "Reserva sessió gratuïta",
        secondary_cta: "Veure serveis",
        trust_badge: "✓ Coach Certificat en Tecnologia",
        go_to_contact_label: "Anar a la pàgina de contacte",
        view_services_label: "Veure tots els serveis disponibles",
    },
    footer: FooterStrings {
        description: "Coaching Tecnològic Professional - Transforma la teva carrera tecnològica amb coaching personalitzat.",
        follow_us: "Segueix-nos",
        rights_reserved: "Tots els drets reservats.",
        privacy_policy: "Política de privacitat",
        cookie_policy: "Política de cookies",
        terms_of_use: "Termes d'ús",
    },
    cookies: CookieStrings {
        title: "Cookies i Privacitat",
        message: "Utilitzem cookies per millorar la teva experiència al nostre lloc web. Les cookies essencials són necessàries per al funcionament bàsic.",
        accept_all: "Acceptar totes",
        accept_selected: "Acceptar seleccionades",
        reject_all: "Rebutjar totes",
        essential: "Cookies essencials",
        essential_description: "Necessàries per al funcionament bàsic del lloc web.",
        analytics: "Cookies analítiques",
        analytics_description: "Ens ajuden a entendre com els visitants interactuen amb el lloc web.",
        marketing: "Cookies de màrqueting",
        marketing_description: "Utilitzades per mostrar anuncis rellevants i mesurar l'efectivitat de les campanyes.",
        required: "Requerides",
        optional: "Opcionals",
    },
    not_found: NotFoundStrings {
        title: "Pàgina no trobada",
        message: "La pàgina que busques no existeix o s'ha mogut.",
        back_home: "Tornar a l'inici",
    },
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: SiteStrings = SiteStrings {
    navigation: NavigationStrings {
        home: NavigationItem { name: "Inicio", href: "/", aria_label: Some("Ir a la página de inicio") },
        about: NavigationItem { name: "Acerca de", href: "/about", aria_label: Some("Ir a la página sobre mí") },
        services: NavigationItem { name: "Servicios", href: "/services", aria_label: Some("Ver mis servicios") },
        portfolio: NavigationItem { name: "Portfolio", href: "/portfolio", aria_label: Some("Ver mi portfolio") },
        blog: NavigationItem { name: "Blog", href: "/blog", aria_label: Some("Leer mi blog") },
        contact: NavigationItem { name: "Contacto", href: "/contact", aria_label: Some("Página de contacto") },
    },
    ui: UiStrings {
        skip_to_content: "Saltar al contenido",
        toggle_menu: "Abrir menú de navegación",
        select_language: "Seleccionar idioma",
        change_language: "Cambiar a {language}",
        main_navigation: "Navegación principal",
        mobile_navigation: "Navegación móvil",
    },
    hero: HeroStrings {
        title: "Tu Coach de Tecnología Personal",
        subtitle: "Aprende a usar tecnología, ciberseguridad e IA sin miedo ni complicaciones. Te ayudo paso a paso, con paciencia y claridad.",
        cta: "Reserva sesión gratuita",
        secondary_cta: "Ver servicios",
        trust_badge: "✓ Coach Certificado en Tecnología",
        go_to_contact_label: "Ir a la página de contacto",
        view_services_label: "Ver todos los servicios disponibles",
    },
    footer: FooterStrings {
        description: "Coaching Tecnológico Profesional - Transforma tu carrera tecnológica con coaching personalizado.",
        follow_us: "Síguenos",
        rights_reserved: "Todos los derechos reservados.",
        privacy_policy: "Política de privacidad",
        cookie_policy: "Política de cookies",
        terms_of_use: "Términos de uso",
    },
    cookies: CookieStrings {
        title: "Cookies y Privacidad",
        message: "Utilizamos cookies para mejorar tu experiencia en nuestro sitio web. Las cookies esenciales son necesarias para el funcionamiento básico.",
        accept_all: "Aceptar todas",
        accept_selected: "Aceptar seleccionadas",
        reject_all: "Rechazar todas",
        essential: "Cookies esenciales",
        essential_description: "Necesarias para el funcionamiento básico del sitio web.",
        analytics: "Cookies analíticas",
        analytics_description: "Nos ayudan a entender cómo los visitantes interactúan con el sitio web.",
        marketing: "Cookies de marketing",
        marketing_description: "Utilizadas para mostrar anuncios relevantes y medir la efectividad de las campañas.",
        required: "Requeridas",
        optional: "Opcionales",
    },
    not_found: NotFoundStrings {
        title: "Página no encontrada",
        message: "La página que buscas no existe o se ha movido.",
        back_home: "Volver al inicio",
    },
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: SiteStrings = SiteStrings {
    navigation: NavigationStrings {
        home: NavigationItem { name: "Home", href: "/", aria_label: Some("Go to homepage") },
        about: NavigationItem { name: "About", href: "/about", aria_label: Some("Learn about me") },
        services: NavigationItem { name: "Services", href: "/services", aria_label: Some("View my services") },
        portfolio: NavigationItem { name: "Portfolio", href: "/portfolio", aria_label: Some("View my portfolio") },
        blog: NavigationItem { name: "Blog", href: "/blog", aria_label: Some("Read my blog") },
        contact: NavigationItem { name: "Contact", href: "/contact", aria_label: Some("Contact page") },
    },
    ui: UiStrings {
        skip_to_content: "Skip to content",
        toggle_menu: "Open navigation menu",
        select_language: "Select language",
        change_language: "Change to {language}",
        main_navigation: "Main navigation",
        mobile_navigation: "Mobile navigation",
    },
    hero: HeroStrings {
        title: "Your Personal Tech Coach",
        subtitle: "Learn to use technology, cybersecurity and AI without fear or complications. I guide you step by step, with patience and clarity.",
        cta: "Book free session",
        secondary_cta: "View services",
        trust_badge: "✓ Certified Tech Coach",
        go_to_contact_label: "Go to contact page",
        view_services_label: "View all available services",
    },
    footer: FooterStrings {
        description: "Professional Tech Coaching - Transform your tech career with personalized coaching.",
        follow_us: "Follow Us",
        rights_reserved: "All rights reserved.",
        privacy_policy: "Privacy Policy",
        cookie_policy: "Cookie Policy",
        terms_of_use: "Terms of Use",
    },
    cookies: CookieStrings {
        title: "Cookies and Privacy",
        message: "We use cookies to improve your experience on our website. Essential cookies are necessary for basic functionality.",
        accept_all: "Accept all",
        accept_selected: "Accept selected",
        reject_all: "Reject all",
        essential: "Essential cookies",
        essential_description: "Necessary for the basic functioning of the website.",
        analytics: "Analytics cookies",
        analytics_description: "Help us understand how visitors interact with the website.",
        marketing: "Marketing cookies",
        marketing_description: "Used to show relevant ads and measure campaign effectiveness.",
        required: "Required",
        optional: "Optional",
    },
    not_found: NotFoundStrings {
        title: "Page not found",
        message: "The page you are looking for does not exist or has moved.",
        back_home: "Back to home",
    },
};
