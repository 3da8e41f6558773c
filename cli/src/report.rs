//! The built-in report: the fixed content script describing the TimeTravel
//! Agency webapp project, expressed as section descriptors.

use docweave::types::{Alignment, Color, Section, Span};

pub const GOLD: Color = Color::new(0xD4, 0xAF, 0x37);
pub const GOLD_DARK: Color = Color::new(0x8B, 0x69, 0x14);
pub const ELECTRIC: Color = Color::new(0x00, 0xD4, 0xFF);
pub const EMERALD: Color = Color::new(0x00, 0xC8, 0x96);
pub const RENAISSANCE: Color = Color::new(0xC4, 0x1E, 0x3A);

const GRAY_66: Color = Color::new(0x66, 0x66, 0x66);
const GRAY_88: Color = Color::new(0x88, 0x88, 0x88);
const GRAY_99: Color = Color::new(0x99, 0x99, 0x99);
const GRAY_CC: Color = Color::new(0xCC, 0xCC, 0xCC);

fn body(text: &str) -> Section {
    Section::Paragraph {
        spans: vec![Span::new(text)],
        align: None,
    }
}

fn body_bold(text: &str) -> Section {
    Section::Paragraph {
        spans: vec![Span::new(text).and_bold()],
        align: None,
    }
}

fn bullet(text: &str) -> Section {
    Section::Bullet {
        text: text.to_string(),
        color: None,
    }
}

fn centered(spans: Vec<Span>) -> Section {
    Section::Paragraph {
        spans,
        align: Some(Alignment::Center),
    }
}

fn table(headers: &[&str], rows: &[&[&str]]) -> Section {
    Section::Table {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
        accent: Some(GOLD),
    }
}

/// the whole report, in page order
pub fn sections() -> Vec<Section> {
    let mut script = Vec::with_capacity(160);

    cover_page(&mut script);
    summary(&mut script);
    presentation(&mut script);
    stack(&mut script);
    architecture_phase(&mut script);
    generation_phase(&mut script);
    ai_phase(&mut script);
    features(&mut script);
    deployment(&mut script);
    ai_tools(&mut script);
    conclusion(&mut script);

    script
}

fn cover_page(script: &mut Vec<Section>) {
    for _ in 0..4 {
        script.push(Section::Spacer);
    }

    script.push(centered(vec![Span::new("\u{2316}").with_size(48.0)]));
    script.push(Section::Spacer);
    script.push(centered(vec![Span::new("TIMETRAVEL AGENCY")
        .with_font("Georgia")
        .with_size(36.0)
        .and_color(GOLD)
        .and_bold()]));
    script.push(centered(vec![Span::new("\u{2500}".repeat(30))
        .with_size(10.0)
        .and_color(GOLD)]));
    script.push(centered(vec![Span::new("Webapp Interactive")
        .with_font("Georgia")
        .with_size(22.0)
        .and_color(GRAY_66)]));
    script.push(Section::Spacer);
    script.push(centered(vec![Span::new(
        "Projet Final \u{2014} M1/M2 Digital & IA",
    )
    .with_size(13.0)
    .and_color(GRAY_88)]));
    script.push(Section::Spacer);
    script.push(Section::Spacer);
    script.push(centered(vec![Span::new("R\u{e9}alis\u{e9} par")
        .with_size(11.0)
        .and_color(GRAY_99)]));
    script.push(centered(vec![Span::new("YAHIA Rayan")
        .with_font("Georgia")
        .with_size(18.0)
        .and_color(GOLD_DARK)
        .and_bold()]));
    script.push(Section::Spacer);
    script.push(centered(vec![Span::new(
        "\u{2192}  https://timetravel-agency-ten.vercel.app",
    )
    .with_size(11.0)
    .and_color(ELECTRIC)]));
    script.push(centered(vec![Span::new("19 f\u{e9}vrier 2026")
        .with_size(11.0)
        .and_color(GRAY_99)]));
    script.push(Section::PageBreak);
}

fn summary(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{2316}  Sommaire".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    let entries = [
        ("1.", "Pr\u{e9}sentation du projet"),
        ("2.", "Stack technique"),
        ("3.", "Architecture & Planning \u{2014} Phase 1"),
        ("4.", "G\u{e9}n\u{e9}ration de code & Vibe Coding \u{2014} Phase 2"),
        ("5.", "Intelligence Artificielle & Agents \u{2014} Phase 3"),
        ("6.", "Features impl\u{e9}ment\u{e9}es"),
        ("7.", "D\u{e9}ploiement \u{2014} Phase 4"),
        ("8.", "Outils IA utilis\u{e9}s"),
        ("9.", "Conclusion"),
    ];
    for (number, title) in entries {
        script.push(Section::Paragraph {
            spans: vec![
                Span::new(format!("{number}  "))
                    .with_font("Georgia")
                    .with_size(12.0)
                    .and_color(GOLD)
                    .and_bold(),
                Span::new(title).with_size(12.0),
            ],
            align: None,
        });
    }
    script.push(Section::PageBreak);
}

fn presentation(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{25C8}  1. Pr\u{e9}sentation du projet".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(body(
        "TimeTravel Agency est une webapp interactive moderne pr\u{e9}sentant une agence \
         fictive de voyages temporels de luxe. Le site permet aux visiteurs de d\u{e9}couvrir \
         trois destinations temporelles uniques, d'interagir avec un agent conversationnel \
         intelligent, de personnaliser leur voyage via un quiz, et de simuler une \
         r\u{e9}servation compl\u{e8}te.",
    ));
    script.push(body(
        "Le projet a \u{e9}t\u{e9} d\u{e9}velopp\u{e9} dans le cadre du cours Digital & IA, en \
         combinant des techniques de vibe coding, d'intelligence artificielle g\u{e9}n\u{e9}rative, \
         et de d\u{e9}veloppement front-end moderne.",
    ));

    script.push(Section::Spacer);
    let separator = || Span::new("   \u{b7}   ").and_color(GRAY_CC);
    script.push(centered(vec![
        Span::new("\u{2605} Paris 1889")
            .with_font("Georgia")
            .with_size(13.0)
            .and_color(GOLD)
            .and_bold(),
        separator(),
        Span::new("\u{2605} Cr\u{e9}tac\u{e9}")
            .with_font("Georgia")
            .with_size(13.0)
            .and_color(EMERALD)
            .and_bold(),
        separator(),
        Span::new("\u{2605} Florence 1504")
            .with_font("Georgia")
            .with_size(13.0)
            .and_color(RENAISSANCE)
            .and_bold(),
    ]));
    script.push(Section::PageBreak);
}

fn stack(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{2699}  2. Stack technique".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(table(
        &["Technologie", "Usage"],
        &[
            &["React 19", "Framework UI \u{2014} composants, state management"],
            &["TypeScript", "Typage statique, fiabilit\u{e9} du code"],
            &["Tailwind CSS v4", "Styling utility-first, design responsive"],
            &["Framer Motion", "Animations fluides, transitions, micro-interactions"],
            &["Lucide React", "Ic\u{f4}nes SVG coh\u{e9}rentes"],
            &["Vite 7", "Build tool ultra-rapide, HMR"],
            &["Web Audio API", "Son d'ambiance g\u{e9}n\u{e9}ratif"],
            &["Vercel", "D\u{e9}ploiement et h\u{e9}bergement production"],
            &["Claude Code", "Assistant IA (Claude Opus 4.6)"],
        ],
    ));
    script.push(Section::PageBreak);
}

fn architecture_phase(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{25B6}  3. Architecture & Planning \u{2014} Phase 1".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(Section::Heading {
        text: "3.1  D\u{e9}finition des features".to_string(),
        level: 2,
    });
    script.push(body("Fonctionnalit\u{e9}s d\u{e9}finies pour la webapp :"));

    let features = [
        "\u{25B8}  Hero section avec animation typewriter et particules",
        "\u{25B8}  \u{c0} propos avec compteurs anim\u{e9}s (3 \u{e9}poques, 2 847 voyageurs, 100% retours)",
        "\u{25B8}  3 destinations avec cards interactives et compteur de places",
        "\u{25B8}  Galerie immersive avec onglets filtres (12 cartes)",
        "\u{25B8}  Frise chronologique interactive des 3 \u{e9}poques",
        "\u{25B8}  Quiz de recommandation personnalis\u{e9}e (4 questions)",
        "\u{25B8}  Formulaire de r\u{e9}servation multi-\u{e9}tapes",
        "\u{25B8}  Chatbot IA conversationnel (Chronos)",
        "\u{25B8}  Section t\u{e9}moignages (6 avis de voyageurs)",
        "\u{25B8}  FAQ en accord\u{e9}on anim\u{e9} (8 questions)",
        "\u{25B8}  Mode sombre/clair avec toggle",
        "\u{25B8}  Son d'ambiance g\u{e9}n\u{e9}ratif (Web Audio API)",
        "\u{25B8}  Easter egg clavier (taper \"time\")",
        "\u{25B8}  Page 404 th\u{e9}matique",
    ];
    for feature in features {
        script.push(bullet(feature));
    }

    script.push(Section::Heading {
        text: "3.2  Structure de navigation".to_string(),
        level: 2,
    });
    script.push(body(
        "Le site suit un flow vertical single-page responsive (mobile-first) :",
    ));
    let routes = [
        "Header fixe \u{2192} Hero \u{2192} \u{c0} propos \u{2192} Destinations \u{2192} Galerie",
        "Timeline \u{2192} Quiz \u{2192} R\u{e9}servation \u{2192} T\u{e9}moignages \u{2192} FAQ \u{2192} Footer",
        "Overlay : Chatbot (bas droite) + Son ambiance (bas gauche) + Easter egg",
    ];
    for route in routes {
        script.push(bullet(route));
    }
    script.push(Section::PageBreak);
}

fn generation_phase(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{25C6}  4. G\u{e9}n\u{e9}ration de code & Vibe Coding \u{2014} Phase 2".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(Section::Heading {
        text: "4.1  Setup & G\u{e9}n\u{e9}ration initiale".to_string(),
        level: 2,
    });
    script.push(body(
        "Le projet a \u{e9}t\u{e9} initialis\u{e9} avec Vite + React + TypeScript, puis \
         d\u{e9}velopp\u{e9} it\u{e9}rativement avec Claude Code (Opus 4.6). Chaque composant a \
         \u{e9}t\u{e9} g\u{e9}n\u{e9}r\u{e9} via des prompts d\u{e9}taill\u{e9}s, test\u{e9}, puis \
         int\u{e9}gr\u{e9} dans l'application.",
    ));

    script.push(Section::Heading {
        text: "4.2  Int\u{e9}gration des assets".to_string(),
        level: 2,
    });
    script.push(body(
        "Les visuels sont g\u{e9}n\u{e9}r\u{e9}s en CSS pur (gradients, ombres, glow effects) \
         avec des emojis comme \u{e9}l\u{e9}ments visuels. Chaque \u{e9}poque a sa palette de \
         couleurs : gold pour Paris, emerald pour le Cr\u{e9}tac\u{e9}, rouge renaissance pour \
         Florence.",
    ));

    script.push(Section::Heading {
        text: "4.3  Animations (exercice optionnel \u{2014} r\u{e9}alis\u{e9} \u{2713})".to_string(),
        level: 2,
    });
    script.push(body("Animations impl\u{e9}ment\u{e9}es avec Framer Motion :"));
    let animations = [
        "Fade-in progressif au scroll (whileInView)",
        "Typewriter anim\u{e9} sur le sous-titre Hero",
        "Hover effects : scale, glow, fl\u{e8}che directionnelle",
        "Transitions entre \u{e9}tapes (quiz, r\u{e9}servation)",
        "Compteurs anim\u{e9}s, accord\u{e9}on FAQ",
        "Particules flottantes en arri\u{e8}re-plan",
        "Easter egg : effet tunnel warp temporel",
        "Loading screen avec animation d\u{2019}entr\u{e9}e",
    ];
    for animation in animations {
        script.push(bullet(animation));
    }
    script.push(Section::PageBreak);
}

fn ai_phase(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{25C8}  5. Intelligence Artificielle & Agents \u{2014} Phase 3".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(Section::Heading {
        text: "5.1  Agent conversationnel \u{2014} Chronos".to_string(),
        level: 2,
    });
    script.push(body(
        "Le chatbot Chronos est accessible via un widget flottant en bas \u{e0} droite. Il \
         utilise un syst\u{e8}me de pattern matching pour r\u{e9}pondre intelligemment aux \
         visiteurs.",
    ));
    script.push(body_bold("Capacit\u{e9}s de Chronos :"));
    let capabilities = [
        "R\u{e9}ponses d\u{e9}taill\u{e9}es sur les 3 destinations",
        "Informations tarifs (12 500 \u{20ac} / 18 900 \u{20ac} / 14 200 \u{20ac})",
        "S\u{e9}curit\u{e9}, garanties, bagages, dur\u{e9}e",
        "Recommandation selon les int\u{e9}r\u{ea}ts",
        "Quick actions + indicateur de frappe",
    ];
    for capability in capabilities {
        script.push(bullet(capability));
    }
    script.push(Section::Paragraph {
        spans: vec![Span::new(
            "Personnalit\u{e9} : professionnel, chaleureux, passionn\u{e9} d\u{2019}histoire, \
             expert en voyage temporel. Ton enthousiaste sans \u{ea}tre familier.",
        )
        .with_size(10.0)
        .and_color(GRAY_66)],
        align: None,
    });

    script.push(Section::Heading {
        text: "5.2  Quiz de recommandation (exercice optionnel \u{2014} r\u{e9}alis\u{e9} \u{2713})"
            .to_string(),
        level: 2,
    });
    script.push(body(
        "Quiz de 4 questions avec syst\u{e8}me de scoring. Chaque r\u{e9}ponse attribue des \
         points aux 3 destinations. La destination avec le meilleur score est recommand\u{e9}e \
         avec une explication personnalis\u{e9}e.",
    ));
    script.push(table(
        &["Question", "Options"],
        &[
            &["Type d'exp\u{e9}rience", "Culturelle / Aventure / \u{c9}l\u{e9}gance"],
            &["P\u{e9}riode pr\u{e9}f\u{e9}r\u{e9}e", "Moderne / Ancienne / Renaissance"],
            &["Pr\u{e9}f\u{e9}rence", "Urbain / Nature / Art"],
            &["Activit\u{e9} id\u{e9}ale", "Monuments / Faune / Mus\u{e9}es"],
        ],
    ));
    script.push(Section::PageBreak);
}

fn features(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{2726}  6. Features impl\u{e9}ment\u{e9}es".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(table(
        &["Feature", "Description", "Fichier"],
        &[
            &["Loading Screen", "\u{c9}cran de chargement anim\u{e9}", "LoadingScreen.tsx"],
            &["Particules", "Arri\u{e8}re-plan anim\u{e9}", "ParticleBackground.tsx"],
            &["Header", "Nav fixe + scroll spy + th\u{e8}me", "Header.tsx"],
            &["Hero", "Titre anim\u{e9}, typewriter, CTA", "Hero.tsx"],
            &["\u{c0} propos", "3 compteurs anim\u{e9}s", "About.tsx"],
            &["Destinations", "3 cards + prix + places", "Destinations.tsx"],
            &["Galerie", "12 cartes, onglets par \u{e9}poque", "Gallery.tsx"],
            &["Timeline", "Frise chronologique verticale", "Timeline.tsx"],
            &["Quiz", "Recommandation 4 questions", "Quiz.tsx"],
            &["R\u{e9}servation", "Formulaire 4 \u{e9}tapes", "Booking.tsx"],
            &["T\u{e9}moignages", "6 avis + \u{e9}toiles", "Testimonials.tsx"],
            &["FAQ", "8 questions accord\u{e9}on", "FAQ.tsx"],
            &["Chatbot", "Agent Chronos", "Chatbot.tsx"],
            &["Th\u{e8}me", "Toggle sombre/clair", "ThemeToggle.tsx"],
            &["Son ambiance", "Web Audio API", "AmbientSound.tsx"],
            &["Easter egg", "Taper \"time\"", "EasterEgg.tsx"],
            &["Page 404", "Perdu dans le temps", "NotFound.tsx"],
        ],
    ));
    script.push(Section::PageBreak);
}

fn deployment(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{2192}  7. D\u{e9}ploiement \u{2014} Phase 4".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(body("Processus de d\u{e9}ploiement :"));
    let steps = [
        "Build de production : npm run build (TypeScript + Vite)",
        "D\u{e9}ploiement via Vercel CLI : vercel --prod",
        "CDN mondial pour des temps de chargement optimaux",
        "HTTPS automatique + certificat SSL",
    ];
    for step in steps {
        script.push(bullet(step));
    }

    script.push(Section::Spacer);
    script.push(centered(vec![Span::new("URL de production")
        .with_size(10.0)
        .and_color(GRAY_99)]));
    script.push(centered(vec![Span::new(
        "https://timetravel-agency-ten.vercel.app",
    )
    .with_font("Georgia")
    .with_size(16.0)
    .and_color(GOLD)
    .and_bold()]));
    script.push(Section::PageBreak);
}

fn ai_tools(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{2699}  8. Outils IA utilis\u{e9}s".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(body(
        "Transparence sur les outils IA utilis\u{e9}s dans ce projet :",
    ));
    script.push(table(
        &["Outil", "Mod\u{e8}le", "Usage"],
        &[
            &["Claude Code", "Claude Opus 4.6", "G\u{e9}n\u{e9}ration du code, debugging, d\u{e9}ploiement"],
            &["Framer Motion", "Open source", "Animations et transitions"],
            &["Tailwind CSS v4", "Open source", "Framework CSS utility-first"],
            &["Vercel", "Cloud", "H\u{e9}bergement et CDN"],
            &["Web Audio API", "Native", "Son g\u{e9}n\u{e9}ratif navigateur"],
        ],
    ));
    script.push(Section::PageBreak);
}

fn conclusion(script: &mut Vec<Section>) {
    script.push(Section::Heading {
        text: "\u{25C8}  9. Conclusion".to_string(),
        level: 1,
    });
    script.push(Section::Divider);

    script.push(body(
        "Ce projet a permis d\u{2019}explorer le vibe coding et l\u{2019}utilisation \
         d\u{2019}outils IA pour le d\u{e9}veloppement web. La webapp TimeTravel Agency \
         int\u{e8}gre toutes les fonctionnalit\u{e9}s demand\u{e9}es dans le brief : interface \
         immersive avec animations, agent conversationnel, quiz de recommandation, formulaire \
         de r\u{e9}servation, et de nombreux bonus.",
    ));
    script.push(body(
        "Le site est enti\u{e8}rement responsive, d\u{e9}ploy\u{e9} en production sur Vercel, \
         et propose une exp\u{e9}rience utilisateur premium avec 17 composants interactifs.",
    ));

    script.push(Section::Spacer);
    script.push(Section::Divider);
    script.push(centered(vec![Span::new(
        "\"Le pass\u{e9} n\u{2019}attend que vous.\"",
    )
    .with_font("Georgia")
    .with_size(14.0)
    .and_color(GOLD)
    .and_italic()]));
    script.push(Section::Spacer);
    script.push(centered(vec![Span::new("\u{2014} TimeTravel Agency")
        .with_font("Georgia")
        .with_size(11.0)
        .and_color(GRAY_99)]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use docweave::types::Composer;

    #[test]
    fn report_has_nine_numbered_chapters() {
        let script = sections();
        let chapter_headings = script
            .iter()
            .filter(|section| matches!(section, Section::Heading { level: 1, .. }))
            .count();
        // the summary page plus chapters 1-9
        assert_eq!(chapter_headings, 10);
    }

    #[test]
    fn report_composes_without_error() {
        let mut composer = Composer::new();
        composer.compose(&sections()).unwrap();
        assert!(!composer.blocks().is_empty());
    }

    #[test]
    fn every_table_in_the_report_is_rectangular() {
        for section in sections() {
            if let Section::Table { headers, rows, .. } = section {
                for row in rows {
                    assert_eq!(row.len(), headers.len());
                }
            }
        }
    }
}
