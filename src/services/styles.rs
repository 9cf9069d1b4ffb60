//! Style catalog — the seven redecoration styles offered in the gallery.

use serde::Serialize;

/// Shared constraint appended to every generation and edit prompt: the
/// room's structure stays, only furnishings change.
pub const STRUCTURE_SUFFIX: &str = "Important: do not modify the structure of the room (walls, \
    floor, ceiling, windows, doors). Only change the furniture, decorative objects, textures, \
    and the colors of those objects to match the requested style. Keep the perspective and \
    angle of the original photo.";

/// A predefined redecoration style: gallery copy plus the generation brief.
#[derive(Debug, Clone, Serialize)]
pub struct StyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Style-specific instruction, without the shared structure constraint.
    brief: &'static str,
}

impl StyleDefinition {
    /// Full generation prompt: the style brief plus the structure constraint.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {STRUCTURE_SUFFIX}", self.brief)
    }
}

pub static STYLES: [StyleDefinition; 7] = [
    StyleDefinition {
        id: "minimalista",
        name: "Minimalist",
        description: "Focuses on simplicity, clean lines, and a monochromatic palette of \
            neutral colors. Less is more: every piece is functional and essential.",
        brief: "Redecorate this room in a minimalist style. Use a neutral color palette, \
            furniture with simple lines, and remove any clutter.",
    },
    StyleDefinition {
        id: "industrial",
        name: "Industrial",
        description: "Inspired by warehouses and factories, defined by raw materials such as \
            exposed brick, metal, and untreated wood. Open spaces with structural elements in view.",
        brief: "Transform this room into an industrial style. Incorporate elements such as \
            exposed brick walls, metal ducts, rustic wood, and functional steel furniture.",
    },
    StyleDefinition {
        id: "rustico",
        name: "Rustic",
        description: "Evokes the warmth of the countryside with natural materials such as wood, \
            stone, and organic fibers. Promotes a cozy atmosphere connected to nature.",
        brief: "Give this room a rustic touch. Use plenty of natural wood, warm textiles such \
            as wool or linen, and an earthy color palette.",
    },
    StyleDefinition {
        id: "clasico",
        name: "Classic",
        description: "Order, symmetry, and elegance define this style. Ornate furniture, \
            luxurious fabrics such as velvet, and refined decorative details are its hallmarks.",
        brief: "Redesign this room in a classic style. Introduce elegant furniture with carved \
            details, heavy curtains, a sophisticated color palette, and ornamental accessories.",
    },
    StyleDefinition {
        id: "mediterraneo",
        name: "Mediterranean",
        description: "Fresh and luminous, inspired by Mediterranean coasts. Dominated by white, \
            shades of blue, and natural materials such as light wood and wicker.",
        brief: "Apply a Mediterranean style to this room. Use a white base, accents in blue and \
            turquoise tones, light wood furniture, and light textiles.",
    },
    StyleDefinition {
        id: "eclectico",
        name: "Eclectic",
        description: "A harmonious mix of different styles, eras, and cultures. Relies on \
            creativity and cohesion through color, texture, and form to create a unique look.",
        brief: "Create an eclectic version of this room. Combine furniture from different eras, \
            mix bold textures and patterns, and use color to unify the space.",
    },
    StyleDefinition {
        id: "bohemio",
        name: "Bohemian",
        description: "Relaxed and free, this style incorporates natural textures, ethnic \
            patterns, plants, and travel finds. A reflection of an adventurous, artistic spirit.",
        brief: "Transform this room into a bohemian space. Add plenty of plants, textiles with \
            ethnic patterns, furniture in natural materials such as rattan, and a mix of vibrant \
            and earthy colors.",
    },
];

#[cfg(test)]
#[path = "styles_test.rs"]
mod tests;
