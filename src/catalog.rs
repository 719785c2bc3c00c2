//! The site's asset batches.
//!
//! Each batch is a fixed list of prompts with their target paths under
//! `assets/images/`. Batches are selected by name on the command line.

use crate::models::{AspectRatio, AssetTask};

pub struct Batch {
    pub name: &'static str,
    pub description: &'static str,
    /// Part of `--all`. Retry batches rewrite an output another batch owns.
    pub in_all: bool,
    tasks: &'static [(&'static str, AspectRatio, &'static str)],
}

impl Batch {
    pub fn tasks(&self) -> Vec<AssetTask> {
        self.tasks
            .iter()
            .map(|(prompt, ratio, output)| AssetTask::new(*prompt, *ratio, *output))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

pub const BATCHES: &[Batch] = &[
    Batch {
        name: "essentials",
        description: "Navy hero background and the three service icons",
        in_all: true,
        tasks: &[
            (
                "professional legal office desk background, navy blue and white color scheme, high quality, clean, trustworthy, minimalist, photorealistic, 4k",
                AspectRatio::Wide16x9,
                "assets/images/hero_bg.png",
            ),
            (
                "simple flat icon of a conversation bubble, navy blue color, white background, minimalist vector style",
                AspectRatio::Square,
                "assets/images/icon_consult.png",
            ),
            (
                "simple flat icon of a document with a pen, navy blue color, white background, minimalist vector style",
                AspectRatio::Square,
                "assets/images/icon_prep.png",
            ),
            (
                "simple flat icon of a courthouse building, navy blue color, white background, minimalist vector style",
                AspectRatio::Square,
                "assets/images/icon_file.png",
            ),
        ],
    },
    Batch {
        name: "premium",
        description: "Emerald and gold hero with line-art icons",
        in_all: true,
        tasks: &[
            (
                "luxurious legal office interior, dark emerald green and gold accents, mahogany desk, cinematic lighting, shallow depth of field, ultra-realistic, 8k, moody atmosphere, elegant, sophisticated, premium architectural photography",
                AspectRatio::Wide16x9,
                "assets/images/premium_hero.png",
            ),
            (
                "minimalist line art icon of a handshake, gold color on white background, thin elegant strokes, vector style, premium design",
                AspectRatio::Square,
                "assets/images/icon_consult_premium.png",
            ),
            (
                "minimalist line art icon of a fountain pen signing a document, gold color on white background, thin elegant strokes, vector style, premium design",
                AspectRatio::Square,
                "assets/images/icon_prep_premium.png",
            ),
            (
                "minimalist line art icon of a courthouse column, gold color on white background, thin elegant strokes, vector style, premium design",
                AspectRatio::Square,
                "assets/images/icon_file_premium.png",
            ),
        ],
    },
    Batch {
        name: "authority",
        description: "Boardroom hero, trust seal and bond paper texture",
        in_all: true,
        tasks: &[
            (
                "cinematic photography of a high-end corporate boardroom table, low angle, focus on a premium fountain pen and legal documents, dark emerald green leather chairs, moody lighting, depth of field, 8k, authoritative, sophisticated",
                AspectRatio::Wide16x9,
                "assets/images/hero_authority.png",
            ),
            (
                "gold embossed seal on white paper, minimalist vector style, scales of justice icon, metallic gold texture, premium certificate quality, isolated",
                AspectRatio::Square,
                "assets/images/trust_seal.png",
            ),
            (
                "high resolution cream colored legal bond paper texture, visible paper grain and fibers, subtle watermark effect, even lighting, seamless texture",
                AspectRatio::Wide16x9,
                "assets/images/bond_paper_texture.png",
            ),
        ],
    },
    Batch {
        name: "office-hero",
        description: "Photorealistic conference room hero",
        in_all: true,
        tasks: &[(
            "modern upscale law office interior, empty conference room with glass walls, blurred background, depth of field, professional corporate atmosphere, natural lighting, ultra-realistic architectural photography, 8k",
            AspectRatio::Wide16x9,
            "assets/images/office_hero_real.png",
        )],
    },
    Batch {
        name: "materials",
        description: "Charcoal texture, abstract portrait hero and glass plate",
        in_all: true,
        tasks: &[
            (
                "high resolution dark charcoal matte paper texture, seamless pattern, subtle grain, premium stationery feel, 8k, evenly lit, neutral lighting, no text, no objects, abstract texture only",
                AspectRatio::Wide16x9,
                "assets/images/texture_charcoal.png",
            ),
            (
                "abstract 3D art of gold scales of justice floating in void, cinematic rim lighting, depth of field, macro photography style, hyper-realistic, dark moody atmosphere, gold and emerald green color palette, minimalist masterpiece, 8k render",
                AspectRatio::Portrait3x4,
                "assets/images/hero_abstract.png",
            ),
            (
                "frosted glass plate with gold edges floating in dark space, raytraced 3D render, subsurface scattering, caustics, soft glow, premium abstract geometric shape, isolated",
                AspectRatio::Square,
                "assets/images/glass_plate.png",
            ),
        ],
    },
    Batch {
        name: "texture-retry",
        description: "Simpler charcoal texture prompt for when the detailed one is refused",
        in_all: false,
        tasks: &[(
            "dark grey abstract noise texture, seamless background, minimal grain, matte finish",
            AspectRatio::Wide16x9,
            "assets/images/texture_charcoal.png",
        )],
    },
];

pub fn find(name: &str) -> Option<&'static Batch> {
    BATCHES.iter().find(|batch| batch.name == name)
}

pub fn names() -> Vec<&'static str> {
    BATCHES.iter().map(|batch| batch.name).collect()
}

/// Batches run by `--all`, in catalog order.
pub fn all_names() -> Vec<&'static str> {
    BATCHES
        .iter()
        .filter(|batch| batch.in_all)
        .map(|batch| batch.name)
        .collect()
}
