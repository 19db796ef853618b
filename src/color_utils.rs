//! Color conversion helpers shared by the shape model and render model.

/// Format an RGB triple as a CSS hex string (`#rrggbb`).
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex([0x22, 0xc5, 0x5e]), "#22c55e");
        assert_eq!(to_hex([0, 0, 0]), "#000000");
        assert_eq!(to_hex([255, 255, 255]), "#ffffff");
    }

    #[test]
    fn test_palette_hex() {
        let hexes: Vec<String> = crate::constants::ROI_PALETTE
            .iter()
            .map(|c| to_hex(*c))
            .collect();
        assert_eq!(hexes[0], "#22c55e");
        assert_eq!(hexes[9], "#84cc16");
    }
}
