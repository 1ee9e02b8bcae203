//! Fixed phrase catalog for prompt synthesis, plus the inspiration pools.
//!
//! Everything the synthesizer says to the image model comes from here:
//! art-style phrases keyed by category, complexity phrases keyed by age
//! group, line-style phrases, and the educational subject instructions.
//! The phrases are English (the model's working language); the inspiration
//! pools and starter prompts are Polish, matching the UI copy.
//!
//! All lookups are total over their enum domains and return fixed text —
//! no randomness here. Callers who want a random suggestion pick from the
//! returned pool themselves.

use crate::options::{AgeGroup, Category, EducationalOptions, LineThickness, MathOperation, Subject};

// ── Art style ──────────────────────────────────────────────────────

/// Art-style phrase for the `Art Style:` section, keyed by category.
pub fn style_phrase(category: Category) -> &'static str {
    match category {
        Category::All => {
            "Style: clean, cute illustration. Simple and easy to understand for children."
        }
        Category::Animals => {
            "Style: cute, cartoon animal illustration. Characters should have big eyes and \
             friendly expressions. The scene should be fun and lively."
        }
        Category::Vehicles => {
            "Style: simple, dynamic vehicle illustration with rounded edges. Avoid complex \
             mechanisms. Vehicles can have fun features like eyes or smiles."
        }
        Category::Fantasy => {
            "Style: fairytale illustration, magical, full of details. Elements should have \
             soft, curved lines. The scene should be charming and mysterious."
        }
        Category::Nature => {
            "Style: calm, organic nature illustration. Forms should be simplified and \
             stylized. Harmonious composition inspired by nature."
        }
        Category::Food => {
            "Style: appetizing, funny food illustration. Food characters (e.g., walking \
             pizza) should be funny and friendly. Use exaggerated shapes."
        }
        Category::Sport => {
            "Style: dynamic, energetic sports illustration. Characters in motion, with \
             exaggerated expressions. The scene should capture the joy of physical activity."
        }
        Category::Space => {
            "Style: cosmic, futuristic illustration with friendly aliens and planets. \
             Spaceships should have funny, unusual shapes. Background can contain cute stars."
        }
        Category::Professions => {
            "Style: friendly, readable illustration depicting different professions. \
             Characters should be smiling and presented in a humorous, simplified way while \
             working."
        }
    }
}

// ── Complexity and line style ──────────────────────────────────────

/// Scene description for the `Subject:` section: the effective subject text
/// embedded in an age-tuned complexity frame.
pub fn complexity_phrase(age_group: AgeGroup, text: &str) -> String {
    match age_group {
        AgeGroup::Ages2To4 => {
            format!("A very simple single object: {text}. Simple shapes, large empty areas.")
        }
        AgeGroup::Ages5To7 => {
            format!("A simple scene featuring: {text}. Clear outlines, moderate detail.")
        }
        AgeGroup::Ages8Plus => {
            format!("A detailed scene featuring: {text}. Intricate details.")
        }
    }
}

/// English age span for prose that addresses the planner ("children aged 5-7").
pub fn age_span(age_group: AgeGroup) -> &'static str {
    match age_group {
        AgeGroup::Ages2To4 => "2-4",
        AgeGroup::Ages5To7 => "5-7",
        AgeGroup::Ages8Plus => "8 and up",
    }
}

/// Line-style phrase for text-to-image generation.
pub fn line_phrase(thickness: LineThickness) -> &'static str {
    match thickness {
        LineThickness::Thick => "Thick, bold outlines.",
        LineThickness::Thin => "Thin, precise outlines.",
    }
}

/// Detail phrase for the image-to-image variant (no subject text to embed).
pub fn restyle_detail_phrase(age_group: AgeGroup) -> &'static str {
    match age_group {
        AgeGroup::Ages2To4 => "Simple shapes, low detail",
        AgeGroup::Ages5To7 => "Moderate detail",
        AgeGroup::Ages8Plus => "High detail",
    }
}

/// Line phrase for the image-to-image variant.
pub fn restyle_line_phrase(thickness: LineThickness) -> &'static str {
    match thickness {
        LineThickness::Thick => "Thick bold lines",
        LineThickness::Thin => "Thin precise lines",
    }
}

// ── Special instructions ───────────────────────────────────────────

/// Default instruction outside educational mode: keep the page text-free.
pub const NO_TEXT_INSTRUCTION: &str = "Do not add any text, words, captions, or labels to the \
     image unless explicitly requested in the subject description.";

/// Shorter no-text rule for the image-to-image variant.
pub const RESTYLE_NO_TEXT_INSTRUCTION: &str = "Do not add any text.";

/// Hard constraints appended to every text-to-image instruction.
pub const HARD_CONSTRAINTS: &str = "Black and white line art only. Pure white background. No \
     gray scaling, no shading, no colors. High contrast. Do not include the prompt text as a \
     title.";

/// Hard constraints for the image-to-image variant.
pub const RESTYLE_CONSTRAINTS: &str = "Black and white line art only. Remove all original \
     colors and shading. Pure white background.";

/// Arithmetic flavor embedded in the math subject instruction.
pub fn math_phrase(operation: MathOperation) -> &'static str {
    match operation {
        MathOperation::AddSubTo10 => "addition and subtraction up to 10",
        MathOperation::AddSubTo20 => "addition and subtraction up to 20",
        MathOperation::Multiplication => "simple multiplication like 2x2",
        MathOperation::Shapes => "counting and recognizing basic shapes",
    }
}

/// The `Special Instructions:` content for educational mode.
///
/// The English subject honors the vocabulary override; the math subject
/// references the selected operation.
pub fn subject_instruction(edu: &EducationalOptions) -> String {
    match edu.subject {
        Subject::English => match edu.vocabulary_override() {
            Some(vocab) => format!(
                "IMPORTANT: The main subject of the image MUST BE '{vocab}'. Include the text \
                 label '{vocab}' and its Polish/English translation below the drawing in \
                 outline font."
            ),
            None => "Include the Polish word and English translation for the subject below \
                 the drawing in outline font (e.g. \"KOT / CAT\")."
                .to_string(),
        },
        Subject::Math => format!(
            "Include simple math problems ({}) on large empty areas suitable for children to \
             solve.",
            math_phrase(edu.math_operation)
        ),
        Subject::Polish => "Focus on Polish culture, legends, or alphabet. If a letter is \
             mentioned (e.g. 'Literka A'), draw the letter large and clear next to the object."
            .to_string(),
        Subject::Nature => "Focus on nature, biology, or geography accuracy suitable for a \
             child. Depict plants, animals, or natural phenomena clearly."
            .to_string(),
        Subject::Music => "Focus on musical instruments, notes, or musical notation. Draw \
             instruments accurately but simplified for coloring. Include music notes in the \
             background."
            .to_string(),
        Subject::Art => "Focus on art, creativity, and patterns. Use outlines that encourage \
             creative coloring (e.g. mandalas, paint brushes, mosaics)."
            .to_string(),
        Subject::Physics => "Focus on physical phenomena (gravity, magnetism, space, \
             machines) in a fun, simplified way suitable for kids."
            .to_string(),
    }
}

// ── Inspiration pools ──────────────────────────────────────────────

const ANIMAL_IDEAS: &[&str] = &[
    "sowa w okularach czytająca książkę",
    "leniwiec w hamaku",
    "tańczący hipopotam w spódniczce baletowej",
    "lis detektyw z lupą",
    "żyrafa w szaliku",
];

const VEHICLE_IDEAS: &[&str] = &[
    "latający autobus szkolny",
    "monster truck zrobiony z warzyw",
    "wyścigówka prowadzona przez ślimaka",
    "statek piracki na kółkach",
    "motocykl z koszem dla psa",
];

const FANTASY_IDEAS: &[&str] = &[
    "ogrodowy krasnal na deskorolce",
    "podwodny zamek z piasku",
    "robot uczący się piec ciasto",
    "wróżka zębuszka z wielkim workiem na zęby",
    "smok jedzący pizzę",
];

const NATURE_IDEAS: &[&str] = &[
    "gadające drzewo opowiadające historie",
    "góra z twarzą śpiącego olbrzyma",
    "rzeka z mleka i miodu płynąca przez las",
    "tęcza, po której można chodzić",
    "chmura w kształcie owcy",
];

const FOOD_IDEAS: &[&str] = &[
    "chodząca marchewka w kapeluszu",
    "dom z piernika z czekoladowym dachem",
    "latające spaghetti z klopsikami",
    "drzewo, na którym rosną pączki",
    "kanapka, która jest statkiem kosmicznym",
];

const SPORT_IDEAS: &[&str] = &[
    "koszykówka na Marsie",
    "wyścigi żółwi z numerami startowymi",
    "pingwiny grające w hokeja",
    "słoń próbujący surfować",
    "koty uprawiające jogę",
];

const SPACE_IDEAS: &[&str] = &[
    "kosmita na wakacjach na Ziemi",
    "planeta zrobiona w całości z waty cukrowej",
    "astronauta sadzący kwiaty na Księżycu",
    "zabawny robot naprawiający satelitę",
    "gwiazdy tworzące kształt uśmiechniętej buzi",
];

const PROFESSION_IDEAS: &[&str] = &[
    "kucharz żonglujący warzywami",
    "naukowiec z szalonymi włosami i miksturami",
    "budowniczy konstruujący wieżę z klocków LEGO",
    "strażak ratujący kota z drzewa",
    "ogrodnik rozmawiający z kwiatami",
];

const POLISH_IDEAS: &[&str] = &[
    "Literka A jak Aligator",
    "Smok Wawelski",
    "Syrenka Warszawska",
    "Pan Twardowski na kogucie",
    "Złota Kaczka",
    "Polskie góry Tatry",
    "Bocian na łące",
    "Orzeł Biały",
];

const MATH_IDEAS: &[&str] = &[
    "3 jabłka i 2 gruszki",
    "geometryczny robot z trójkątów",
    "sowa licząca gwiazdy",
    "cyfry od 1 do 9 na balonach",
    "sklepik z cenami",
];

const BIOLOGY_IDEAS: &[&str] = &[
    "Cykl życia motyla",
    "Cztery pory roku na jednym drzewie",
    "Obieg wody w przyrodzie",
    "Las liściasty i jego mieszkańcy",
    "Budowa kwiatu",
    "Zwierzęta leśne",
    "Segregacja śmieci",
];

const ENGLISH_IDEAS: &[&str] = &[
    "Kot / Cat",
    "Pies / Dog",
    "Dom / House",
    "Szkoła / School",
    "Rodzina / Family",
    "Kolory / Colors",
    "Owoce / Fruits",
    "Pogoda / Weather",
];

const MUSIC_IDEAS: &[&str] = &[
    "Klucz wiolinowy i nutki",
    "Gitara i perkusja",
    "Orkiestra zwierząt",
    "Fortepian z klawiszami",
    "Dzieci śpiewające piosenkę",
    "Trąbka i saksofon",
];

const ART_IDEAS: &[&str] = &[
    "Paleta malarza z farbami",
    "Martwa natura z owocami",
    "Wielobarwna mozaika",
    "Abstrakcyjne kształty",
    "Dzieci malujące obraz",
    "Rzeźba z gliny",
];

const PHYSICS_IDEAS: &[&str] = &[
    "Magnes przyciągający metal",
    "Tęcza i pryzmat (światło)",
    "Równoważnia (dźwignia)",
    "Rakieta startująca w kosmos",
    "Balon na ogrzane powietrze",
    "Koła zębate zegara",
];

/// Inspiration pool for a classic category. `All` pools every category.
pub fn category_inspirations(category: Category) -> Vec<&'static str> {
    match category {
        Category::All => [
            ANIMAL_IDEAS,
            VEHICLE_IDEAS,
            FANTASY_IDEAS,
            NATURE_IDEAS,
            FOOD_IDEAS,
            SPORT_IDEAS,
            SPACE_IDEAS,
            PROFESSION_IDEAS,
        ]
        .concat(),
        Category::Animals => ANIMAL_IDEAS.to_vec(),
        Category::Vehicles => VEHICLE_IDEAS.to_vec(),
        Category::Fantasy => FANTASY_IDEAS.to_vec(),
        Category::Nature => NATURE_IDEAS.to_vec(),
        Category::Food => FOOD_IDEAS.to_vec(),
        Category::Sport => SPORT_IDEAS.to_vec(),
        Category::Space => SPACE_IDEAS.to_vec(),
        Category::Professions => PROFESSION_IDEAS.to_vec(),
    }
}

/// Inspiration pool for an educational subject.
pub fn subject_inspirations(subject: Subject) -> &'static [&'static str] {
    match subject {
        Subject::English => ENGLISH_IDEAS,
        Subject::Math => MATH_IDEAS,
        Subject::Polish => POLISH_IDEAS,
        Subject::Nature => BIOLOGY_IDEAS,
        Subject::Music => MUSIC_IDEAS,
        Subject::Art => ART_IDEAS,
        Subject::Physics => PHYSICS_IDEAS,
    }
}

// ── Starters ───────────────────────────────────────────────────────

/// A labeled one-click starter prompt shown on the empty canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Starter {
    pub label: &'static str,
    pub prompt: &'static str,
}

const fn starter(label: &'static str, prompt: &'static str) -> Starter {
    Starter { label, prompt }
}

/// Starters for classic (and storybook) mode.
pub const CLASSIC_STARTERS: &[Starter] = &[
    starter("Wesoły robot", "wesoły robot bawiący się z psem"),
    starter("Zamek na chmurze", "zamek księżniczki na chmurze"),
    starter("Kosmiczna podróż", "kosmiczny statek lecący między planetami"),
    starter("Podwodny świat", "podwodny świat z kolorowymi rybkami"),
];

const ENGLISH_STARTERS: &[Starter] = &[
    starter("Pies / Dog", "wesoły pies biegnący za piłką"),
    starter("Dom / House", "mały domek z ogródkiem"),
    starter("Jabłko / Apple", "duże czerwone jabłko na stole"),
    starter("Kot / Cat", "kot śpiący na poduszce"),
];

const MATH_STARTERS: &[Starter] = &[
    starter("Dodawanie", "dwie wesołe żabki na liściu lilii wodnej"),
    starter("Liczby 1-5", "pięć balonów lecących w niebo"),
    starter("Proste figury", "robot zbudowany z kwadratów i trójkątów"),
    starter("Mnożenie", "pudełka z cukierkami ułożone równo na półce"),
];

const POLISH_STARTERS: &[Starter] = &[
    starter("Literka A", "Wielka litera A i aligator"),
    starter("Smok Wawelski", "Smok Wawelski ziejący ogniem pod zamkiem"),
    starter("Syrenka", "Syrenka Warszawska nad rzeką Wisłą"),
    starter("Ortografia", "Góra i chmura (wyrazy z Ó i U)"),
];

const BIOLOGY_STARTERS: &[Starter] = &[
    starter("Las", "Las liściasty z grzybami i wiewiórką"),
    starter("Pory roku", "Drzewo podzielone na cztery pory roku"),
    starter("Segregacja", "Kolorowe kosze na śmieci i recykling"),
    starter("Woda", "Obieg wody: chmury, deszcz, rzeka, morze"),
];

const MUSIC_STARTERS: &[Starter] = &[
    starter("Instrumenty", "Gitara, trąbka i bębenek"),
    starter("Klucz wiolinowy", "Duży klucz wiolinowy i nutki na pięciolinii"),
    starter("Orkiestra", "Zwierzęta grające w orkiestrze"),
    starter("Pianino", "Klawisze pianina z bliska"),
];

const ART_STARTERS: &[Starter] = &[
    starter("Paleta barw", "Paleta malarska z pędzlami"),
    starter("Martwa natura", "Misa z owocami na stole"),
    starter("Mozaika", "Wzór mozaiki z geometrycznych kształtów"),
    starter("Sztuka", "Sztaluga z pustym płótnem w pracowni"),
];

const PHYSICS_STARTERS: &[Starter] = &[
    starter("Magnes", "Magnes podkowiasty przyciągający śrubki"),
    starter("Kosmos", "Układ Słoneczny z planetami"),
    starter("Pryzmat", "Pryzmat rozszczepiający światło na tęczę"),
    starter("Maszyny", "Prosta waga szalkowa"),
];

/// Starters for an educational subject.
pub fn subject_starters(subject: Subject) -> &'static [Starter] {
    match subject {
        Subject::English => ENGLISH_STARTERS,
        Subject::Math => MATH_STARTERS,
        Subject::Polish => POLISH_STARTERS,
        Subject::Nature => BIOLOGY_STARTERS,
        Subject::Music => MUSIC_STARTERS,
        Subject::Art => ART_STARTERS,
        Subject::Physics => PHYSICS_STARTERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_phrase_is_total_and_starts_with_style() {
        for category in Category::VARIANTS {
            assert!(style_phrase(category).starts_with("Style:"));
        }
    }

    #[test]
    fn complexity_phrase_embeds_text() {
        for age in AgeGroup::VARIANTS {
            let phrase = complexity_phrase(age, "smok jedzący pizzę");
            assert!(phrase.contains("smok jedzący pizzę"));
        }
    }

    #[test]
    fn vocabulary_override_dominates_instruction() {
        let edu = EducationalOptions {
            subject: Subject::English,
            custom_vocabulary: "Dom / House".into(),
            ..Default::default()
        };
        let instruction = subject_instruction(&edu);
        assert!(instruction.contains("MUST BE 'Dom / House'"));

        let plain = EducationalOptions::default();
        assert!(subject_instruction(&plain).contains("KOT / CAT"));
    }

    #[test]
    fn math_instruction_references_operation() {
        let edu = EducationalOptions {
            subject: Subject::Math,
            math_operation: MathOperation::Multiplication,
            ..Default::default()
        };
        assert!(subject_instruction(&edu).contains("multiplication"));
    }

    #[test]
    fn all_category_pools_every_idea() {
        let all = category_inspirations(Category::All);
        assert_eq!(all.len(), 40);
        assert!(all.contains(&"smok jedzący pizzę"));
        assert!(all.contains(&"koszykówka na Marsie"));
    }

    #[test]
    fn every_subject_has_a_pool_and_starters() {
        for subject in Subject::VARIANTS {
            assert!(!subject_inspirations(subject).is_empty());
            assert_eq!(subject_starters(subject).len(), 4);
        }
    }
}
