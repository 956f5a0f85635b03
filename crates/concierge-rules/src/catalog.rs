//! Every canned reply the assistant can produce.
//!
//! Replies are fully formed multi-line strings per language, not composed
//! from a key/value translation table: each builder owns its EN and FR
//! variants (or a single Arabic variant) plus its suggested links. All
//! builders share the `fn(Lang) -> Reply` shape so the rule table can hold
//! them as plain function pointers; the Arabic builders ignore the display
//! language since their content is monolingual.

use concierge_core::{Lang, Link};

use crate::reply::Reply;

// ─────────────────────────────────────────────────────────────────────────────
// Link targets
// ─────────────────────────────────────────────────────────────────────────────

/// Services catalog page.
pub const SERVICES: &str = "/services";
/// Contact section anchor on the landing page.
pub const CONTACT: &str = "/#contact";
/// About section anchor on the landing page.
pub const ABOUT: &str = "/#about";
/// Portfolio/achievements gallery page.
pub const ACHIEVEMENTS: &str = "/achievements";
/// Studio Instagram profile (external).
pub const INSTAGRAM: &str = "https://www.instagram.com/codemarket_studio";

fn pick(lang: Lang, fr: &str, en: &str) -> String {
    if lang.is_fr() { fr.to_string() } else { en.to_string() }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session seed
// ─────────────────────────────────────────────────────────────────────────────

/// Welcome message seeded into an empty transcript on first open.
///
/// Not produced by the classifier; the session appends it directly.
#[must_use]
pub fn welcome(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "Bonjour ! Je suis votre assistant virtuel CodeMarket. Je suis là pour vous guider tout au long de votre visite et répondre à vos questions.",
            "Hello! I am your CodeMarket virtual assistant. I'm here to guide you through your visit and answer your questions.",
        ),
        vec![
            Link::internal(pick(lang, "Voir nos services", "View our services"), SERVICES),
            Link::internal(pick(lang, "Nos réalisations", "Our achievements"), ACHIEVEMENTS),
        ],
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Arabic-scoped replies
// ─────────────────────────────────────────────────────────────────────────────

/// Arabic greeting with a short services overview.
#[must_use]
pub fn arabic_greeting(_lang: Lang) -> Reply {
    Reply::new(
        "مرحبا! 👋 أهلا بك في CodeMarket.\n\nكيف يمكنني مساعدتك اليوم؟\n\n🛠️ خدماتنا:\n• تصميم الشعارات\n• تطوير المواقع\n• قواعد البيانات\n• العروض التقديمية\n• تقارير التدريب",
        vec![
            Link::internal("خدماتنا", SERVICES),
            Link::internal("اتصل بنا", CONTACT),
        ],
    )
}

/// Arabic price table.
#[must_use]
pub fn arabic_pricing(_lang: Lang) -> Reply {
    Reply::new(
        "💰 **أسعارنا:**\n\n• الشعارات: 500 - 1500 درهم\n• المواقع الإلكترونية: 2000 - 10000 درهم\n• قواعد البيانات: 1500 - 5000 درهم\n• العروض التقديمية: 300 - 800 درهم\n• التطبيقات: 3000+ درهم\n\nتواصل معنا للحصول على عرض أسعار مخصص!",
        vec![
            Link::internal("طلب عرض سعر", CONTACT),
            Link::internal("خدماتنا", SERVICES),
        ],
    )
}

/// Arabic contact details.
#[must_use]
pub fn arabic_contact(_lang: Lang) -> Reply {
    Reply::new(
        "📞 **تواصل معنا:**\n\n📧 البريد: codemarket@gmail.com\n📱 الهاتف: 0778112836\n📸 انستغرام: @codemarket_studio\n\n⏰ أوقات العمل: الإثنين-الجمعة 9ص-1م",
        vec![
            Link::internal("نموذج الاتصال", CONTACT),
            Link::external("Instagram", INSTAGRAM),
        ],
    )
}

/// Arabic generic menu for Arabic-script input no keyword rule caught.
#[must_use]
pub fn arabic_fallback(_lang: Lang) -> Reply {
    Reply::new(
        "شكرا لرسالتك! 😊\n\nيمكنني مساعدتك في:\n• **خدماتنا** والأسعار\n• كيفية **الاتصال** بنا\n• **إنجازاتنا**\n\nما الذي تريد معرفته؟",
        vec![
            Link::internal("خدماتنا", SERVICES),
            Link::internal("اتصل بنا", CONTACT),
        ],
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Latin-script replies
// ─────────────────────────────────────────────────────────────────────────────

/// Localized greeting.
#[must_use]
pub fn greeting(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "Bonjour ! 👋 Bienvenue chez CodeMarket. Comment puis-je vous aider aujourd'hui ?",
            "Hello! 👋 Welcome to CodeMarket. How can I help you today?",
        ),
        vec![
            Link::internal(pick(lang, "Nos services", "Our services"), SERVICES),
            Link::internal(pick(lang, "Nous contacter", "Contact us"), CONTACT),
        ],
    )
}

/// Services overview with starting prices.
#[must_use]
pub fn services(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "🛠️ **Nos Services:**\n\n• **Logo** - À partir de 500 DH\n• **Site Web** - À partir de 2000 DH\n• **Base de données** - À partir de 1500 DH\n• **Présentations** - À partir de 300 DH\n• **Rapports de stage** - À partir de 400 DH\n• **Applications mobiles** - À partir de 3000 DH",
            "🛠️ **Our Services:**\n\n• **Logo** - Starting from 500 DH\n• **Website** - Starting from 2000 DH\n• **Database** - Starting from 1500 DH\n• **Presentations** - Starting from 300 DH\n• **Internship Reports** - Starting from 400 DH\n• **Mobile Apps** - Starting from 3000 DH",
        ),
        vec![
            Link::internal(pick(lang, "Voir tous les services", "View all services"), SERVICES),
            Link::internal(pick(lang, "Commander maintenant", "Order now"), CONTACT),
        ],
    )
}

/// Price table across all service categories.
#[must_use]
pub fn pricing(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "💰 **Nos Tarifs:**\n\n• Présentations: 300 - 800 DH\n• Logos: 500 - 1500 DH\n• Sites Web: 2000 - 10000+ DH\n• Bases de données: 1500 - 5000 DH\n• Applications: 3000+ DH\n\nContactez-nous pour un devis personnalisé !",
            "💰 **Our Pricing:**\n\n• Presentations: 300 - 800 DH\n• Logos: 500 - 1500 DH\n• Websites: 2000 - 10000+ DH\n• Databases: 1500 - 5000 DH\n• Apps: 3000+ DH\n\nContact us for a custom quote!",
        ),
        vec![
            Link::internal(pick(lang, "Demander un devis", "Get a quote"), CONTACT),
            Link::internal(pick(lang, "Voir les services", "View services"), SERVICES),
        ],
    )
}

/// Contact details and opening hours.
#[must_use]
pub fn contact(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "📞 **Contactez-nous:**\n\n📧 Email: codemarket@gmail.com\n📧 Support: supportcodemarket@gmail.com\n📱 Tél: 0778112836\n📸 Instagram: @codemarket_studio\n\n⏰ Horaires: Lun-Ven 9h-13h",
            "📞 **Contact Us:**\n\n📧 Email: codemarket@gmail.com\n📧 Support: supportcodemarket@gmail.com\n📱 Phone: 0778112836\n📸 Instagram: @codemarket_studio\n\n⏰ Hours: Mon-Fri 9am-1pm",
        ),
        vec![
            Link::internal(pick(lang, "Formulaire de contact", "Contact form"), CONTACT),
            Link::external("Instagram", INSTAGRAM),
        ],
    )
}

/// Studio identity blurb.
#[must_use]
pub fn about(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "🎯 **À propos de CodeMarket:**\n\nCodeMarket est un studio numérique spécialisé dans la création de contenus modernes et professionnels.\n\n✨ Innovation • Créativité • Professionnalisme\n\nNous transformons vos idées en projets visuels de haute qualité !",
            "🎯 **About CodeMarket:**\n\nCodeMarket is a digital studio specialized in creating modern and professional content.\n\n✨ Innovation • Creativity • Professionalism\n\nWe transform your ideas into high-quality visual projects!",
        ),
        vec![
            Link::internal(pick(lang, "En savoir plus", "Learn more"), ABOUT),
            Link::internal(pick(lang, "Nos réalisations", "Our achievements"), ACHIEVEMENTS),
        ],
    )
}

/// Portfolio overview.
#[must_use]
pub fn portfolio(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "🎨 **Nos Réalisations:**\n\n• Logos d'entreprises\n• Sites web modernes\n• Applications mobiles\n• Présentations professionnelles\n• Maquettes de produits\n• CV interactifs",
            "🎨 **Our Achievements:**\n\n• Company logos\n• Modern websites\n• Mobile applications\n• Professional presentations\n• Product mockups\n• Interactive CVs",
        ),
        vec![
            Link::internal(pick(lang, "Voir nos réalisations", "View our achievements"), ACHIEVEMENTS),
            Link::internal(pick(lang, "Commander un projet", "Order a project"), CONTACT),
        ],
    )
}

/// Logo package details.
#[must_use]
pub fn logo(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "🎨 **Création de Logo:**\n\n• Logo simple: 500 DH\n• Logo + variations: 800 DH\n• Pack complet branding: 1500 DH\n\n📅 Délai: 2-5 jours\n\nInclus: Fichiers PNG, SVG, PDF",
            "🎨 **Logo Creation:**\n\n• Simple logo: 500 DH\n• Logo + variations: 800 DH\n• Full branding pack: 1500 DH\n\n📅 Delivery: 2-5 days\n\nIncludes: PNG, SVG, PDF files",
        ),
        vec![Link::internal(pick(lang, "Commander un logo", "Order a logo"), CONTACT)],
    )
}

/// Web development packages.
#[must_use]
pub fn website(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "💻 **Développement Web:**\n\n• Landing page: 2000 DH\n• Site vitrine: 4000 DH\n• Site e-commerce: 8000 DH+\n• Application web: 10000 DH+\n\n📅 Délai: 5-15 jours\n\n✅ Responsive • SEO • Hébergement conseillé",
            "💻 **Web Development:**\n\n• Landing page: 2000 DH\n• Business site: 4000 DH\n• E-commerce: 8000 DH+\n• Web app: 10000 DH+\n\n📅 Delivery: 5-15 days\n\n✅ Responsive • SEO • Hosting advice",
        ),
        vec![
            Link::internal(pick(lang, "Commander un site", "Order a website"), CONTACT),
            Link::internal(pick(lang, "Voir nos sites", "View our websites"), ACHIEVEMENTS),
        ],
    )
}

/// Presentation packages.
#[must_use]
pub fn presentation(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "📊 **Présentations Professionnelles:**\n\n• Présentation simple (10 slides): 300 DH\n• Présentation complète (20+ slides): 500 DH\n• Présentation premium: 800 DH\n\n📅 Délai: 1-3 jours\n\n✅ PowerPoint • PDF • Design moderne",
            "📊 **Professional Presentations:**\n\n• Simple presentation (10 slides): 300 DH\n• Complete presentation (20+ slides): 500 DH\n• Premium presentation: 800 DH\n\n📅 Delivery: 1-3 days\n\n✅ PowerPoint • PDF • Modern design",
        ),
        vec![Link::internal(
            pick(lang, "Commander une présentation", "Order a presentation"),
            CONTACT,
        )],
    )
}

/// Internship report formatting packages.
#[must_use]
pub fn report(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "📄 **Rapports de Stage:**\n\n• Mise en forme basique: 400 DH\n• Mise en forme complète: 700 DH\n• Rédaction assistée: sur devis\n\n📅 Délai: 2-5 jours\n\n✅ Word • PDF • Normes académiques",
            "📄 **Internship Reports:**\n\n• Basic formatting: 400 DH\n• Complete formatting: 700 DH\n• Assisted writing: on quote\n\n📅 Delivery: 2-5 days\n\n✅ Word • PDF • Academic standards",
        ),
        vec![Link::internal(pick(lang, "Commander un rapport", "Order a report"), CONTACT)],
    )
}

/// Database design packages.
#[must_use]
pub fn database(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "🗄️ **Bases de Données:**\n\n• Conception BD simple: 1500 DH\n• BD complexe: 3000 DH+\n• Migration/Optimisation: 2000 DH+\n\n📅 Délai: 5-10 jours\n\n✅ MySQL • PostgreSQL • MongoDB",
            "🗄️ **Database Management:**\n\n• Simple DB design: 1500 DH\n• Complex DB: 3000 DH+\n• Migration/Optimization: 2000 DH+\n\n📅 Delivery: 5-10 days\n\n✅ MySQL • PostgreSQL • MongoDB",
        ),
        vec![Link::internal(
            pick(lang, "Commander une base de données", "Order a database"),
            CONTACT,
        )],
    )
}

/// Mobile application packages.
#[must_use]
pub fn mobile(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "📱 **Applications Mobiles:**\n\n• Design UI/UX: 1500 DH\n• App simple: 3000 DH\n• App complète: 6000 DH+\n\n📅 Délai: 10-30 jours\n\n✅ iOS • Android • React Native",
            "📱 **Mobile Applications:**\n\n• UI/UX Design: 1500 DH\n• Simple app: 3000 DH\n• Complete app: 6000 DH+\n\n📅 Delivery: 10-30 days\n\n✅ iOS • Android • React Native",
        ),
        vec![Link::internal(pick(lang, "Commander une app", "Order an app"), CONTACT)],
    )
}

/// Acknowledgment to thanks. No links.
#[must_use]
pub fn thanks(lang: Lang) -> Reply {
    Reply::text_only(pick(
        lang,
        "Je vous en prie ! 🙏 N'hésitez pas si vous avez d'autres questions. Bonne journée ! ✨",
        "You're welcome! 🙏 Feel free to ask if you have more questions. Have a great day! ✨",
    ))
}

/// Goodbye. No links.
#[must_use]
pub fn farewell(lang: Lang) -> Reply {
    Reply::text_only(pick(
        lang,
        "Au revoir ! 👋 À bientôt chez CodeMarket ! ✨",
        "Goodbye! 👋 See you soon at CodeMarket! ✨",
    ))
}

/// Capability menu for explicit help requests.
#[must_use]
pub fn help(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "🤖 **Comment puis-je vous aider ?**\n\nVous pouvez me demander:\n• Nos services et tarifs\n• Comment nous contacter\n• Nos réalisations\n• Informations sur les logos, sites web, présentations...\n\nTapez votre question !",
            "🤖 **How can I help you?**\n\nYou can ask me about:\n• Our services and pricing\n• How to contact us\n• Our achievements\n• Info about logos, websites, presentations...\n\nType your question!",
        ),
        vec![
            Link::internal(pick(lang, "Voir les services", "View services"), SERVICES),
            Link::internal(pick(lang, "Nous contacter", "Contact us"), CONTACT),
        ],
    )
}

/// Instagram handle and DM pointer.
#[must_use]
pub fn instagram(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "📸 **Suivez-nous sur Instagram:**\n\n@codemarket_studio\n\nVous pouvez scanner notre QR code dans la section contact ou nous envoyer un DM directement !",
            "📸 **Follow us on Instagram:**\n\n@codemarket_studio\n\nYou can scan our QR code in the contact section or send us a DM directly!",
        ),
        vec![
            Link::external("Instagram", INSTAGRAM),
            Link::internal(pick(lang, "Section contact", "Contact section"), CONTACT),
        ],
    )
}

/// Delivery-time table per category.
#[must_use]
pub fn delivery(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "⏰ **Délais de Livraison:**\n\n• Présentations: 1-3 jours\n• Logos: 2-5 jours\n• Sites web: 5-15 jours\n• Rapports: 2-5 jours\n• Apps: 10-30 jours\n\nLes délais peuvent varier selon la complexité.",
            "⏰ **Delivery Times:**\n\n• Presentations: 1-3 days\n• Logos: 2-5 days\n• Websites: 5-15 days\n• Reports: 2-5 days\n• Apps: 10-30 days\n\nTimes may vary based on complexity.",
        ),
        vec![Link::internal(pick(lang, "Commander maintenant", "Order now"), CONTACT)],
    )
}

/// Accepted payment methods.
#[must_use]
pub fn payment(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "💳 **Modes de Paiement:**\n\n• Virement bancaire\n• PayPal\n• Western Union\n• Cash (local)\n\n50% à la commande, 50% à la livraison pour les gros projets.",
            "💳 **Payment Methods:**\n\n• Bank transfer\n• PayPal\n• Western Union\n• Cash (local)\n\n50% upfront, 50% on delivery for large projects.",
        ),
        vec![Link::internal(pick(lang, "Nous contacter", "Contact us"), CONTACT)],
    )
}

/// Generic menu. The table's unconditional catch-all.
#[must_use]
pub fn fallback(lang: Lang) -> Reply {
    Reply::new(
        pick(
            lang,
            "Merci pour votre message ! 😊\n\nJe peux vous aider avec:\n• Nos **services** et tarifs\n• Comment nous **contacter**\n• Nos **réalisations**\n\nQue souhaitez-vous savoir ?",
            "Thanks for your message! 😊\n\nI can help you with:\n• Our **services** and pricing\n• How to **contact** us\n• Our **achievements**\n\nWhat would you like to know?",
        ),
        vec![
            Link::internal(pick(lang, "Voir les services", "View services"), SERVICES),
            Link::internal(pick(lang, "Nous contacter", "Contact us"), CONTACT),
            Link::internal(pick(lang, "Nos réalisations", "Our achievements"), ACHIEVEMENTS),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_links_services_and_achievements() {
        let reply = welcome(Lang::En);
        let targets: Vec<&str> = reply.links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, [SERVICES, ACHIEVEMENTS]);
    }

    #[test]
    fn welcome_is_localized() {
        assert!(welcome(Lang::Fr).text.starts_with("Bonjour"));
        assert!(welcome(Lang::En).text.starts_with("Hello"));
    }

    #[test]
    fn arabic_builders_ignore_display_language() {
        assert_eq!(arabic_pricing(Lang::En), arabic_pricing(Lang::Fr));
        assert_eq!(arabic_greeting(Lang::En), arabic_greeting(Lang::Fr));
    }

    #[test]
    fn social_replies_have_no_links() {
        assert!(thanks(Lang::En).links.is_empty());
        assert!(farewell(Lang::Fr).links.is_empty());
    }

    #[test]
    fn instagram_link_is_external() {
        let reply = instagram(Lang::En);
        assert!(reply.links[0].external);
        assert_eq!(reply.links[0].target, INSTAGRAM);
        assert!(!reply.links[1].external);
    }

    #[test]
    fn fallback_offers_three_destinations() {
        for lang in [Lang::En, Lang::Fr] {
            let reply = fallback(lang);
            let targets: Vec<&str> = reply.links.iter().map(|l| l.target.as_str()).collect();
            assert_eq!(targets, [SERVICES, CONTACT, ACHIEVEMENTS]);
        }
    }

    #[test]
    fn link_labels_follow_language() {
        assert_eq!(greeting(Lang::Fr).links[0].label, "Nos services");
        assert_eq!(greeting(Lang::En).links[0].label, "Our services");
    }

    #[test]
    fn every_builder_produces_text() {
        let builders: &[fn(Lang) -> Reply] = &[
            welcome,
            arabic_greeting,
            arabic_pricing,
            arabic_contact,
            arabic_fallback,
            greeting,
            services,
            pricing,
            contact,
            about,
            portfolio,
            logo,
            website,
            presentation,
            report,
            database,
            mobile,
            thanks,
            farewell,
            help,
            instagram,
            delivery,
            payment,
            fallback,
        ];
        for builder in builders {
            for lang in [Lang::En, Lang::Fr] {
                assert!(!builder(lang).text.is_empty());
            }
        }
    }
}
