//! The fixed table of Sen-Know ROM groups.

use crate::layout::Arrangement;

const USER1_SIZE: usize = 0x80000; // 512KB per program chip
const MASK_ROM_SIZE: usize = 0x400000; // 4MB per graphics/sound chip

/// One logical ROM: the chips it is dumped as, and the file it combines into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomGroup {
    pub name: &'static str,
    pub chip_size: usize,
    pub arrangement: Arrangement,
    /// Original chip filenames, in chip order.
    pub chips: &'static [&'static str],
    pub combined: &'static str,
}

impl RomGroup {
    pub fn chip_count(&self) -> usize {
        self.chips.len()
    }

    /// Size of the combined file. There is no header or padding.
    pub fn combined_size(&self) -> usize {
        self.chip_size * self.chip_count()
    }
}

const SENKNOW_GROUPS: [RomGroup; 5] = [
    RomGroup {
        name: "user1",
        chip_size: USER1_SIZE,
        arrangement: Arrangement::Interleave,
        chips: &["snw000j1.u6", "snw001j1.u4"],
        combined: "user1.rom",
    },
    RomGroup {
        name: "spritegen",
        chip_size: MASK_ROM_SIZE,
        arrangement: Arrangement::Concatenate,
        chips: &["snw10000.u21", "snw10100.u20"],
        combined: "spritegen.rom",
    },
    RomGroup {
        name: "gfx2",
        chip_size: MASK_ROM_SIZE,
        arrangement: Arrangement::Concatenate,
        chips: &["snw20000.u17", "snw20100.u9"],
        combined: "gfx2.rom",
    },
    RomGroup {
        name: "gfx3",
        chip_size: MASK_ROM_SIZE,
        arrangement: Arrangement::Concatenate,
        chips: &["snw21000.u3"],
        combined: "gfx3.rom",
    },
    RomGroup {
        name: "ymz",
        chip_size: MASK_ROM_SIZE,
        arrangement: Arrangement::Concatenate,
        chips: &["snw30000.u1"],
        combined: "ymz.rom",
    },
];

/// An ordered list of groups, processed front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomSet {
    groups: Vec<RomGroup>,
}

impl RomSet {
    pub fn new(groups: Vec<RomGroup>) -> Self {
        Self { groups }
    }

    /// The Sen-Know set: user1, spritegen, gfx2, gfx3, ymz.
    pub fn senknow() -> Self {
        Self::new(SENKNOW_GROUPS.to_vec())
    }

    pub fn groups(&self) -> &[RomGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&RomGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

impl Default for RomSet {
    fn default() -> Self {
        Self::senknow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senknow_group_order() {
        let set = RomSet::senknow();
        let names: Vec<_> = set.groups().iter().map(|g| g.name).collect();
        assert_eq!(names, ["user1", "spritegen", "gfx2", "gfx3", "ymz"]);
    }

    #[test]
    fn senknow_sizes() {
        let set = RomSet::senknow();
        let user1 = set.group("user1").unwrap();
        assert_eq!(user1.arrangement, Arrangement::Interleave);
        assert_eq!(user1.combined_size(), 0x100000);

        assert_eq!(set.group("spritegen").unwrap().combined_size(), 0x800000);
        assert_eq!(set.group("gfx2").unwrap().combined_size(), 0x800000);
        assert_eq!(set.group("gfx3").unwrap().combined_size(), 0x400000);
        assert_eq!(set.group("ymz").unwrap().combined_size(), 0x400000);
    }

    #[test]
    fn only_user1_interleaves() {
        for group in RomSet::senknow().groups() {
            let expected = if group.name == "user1" {
                Arrangement::Interleave
            } else {
                Arrangement::Concatenate
            };
            assert_eq!(group.arrangement, expected, "{}", group.name);
        }
    }

    #[test]
    fn unknown_group() {
        assert!(RomSet::senknow().group("maincpu").is_none());
    }
}
