/// A fixed link that is always part of the export, independent of the
/// spreadsheet: team members' personal instances plus shared pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomEntry {
    pub display_name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub owner: &'static str,
}

const fn custom(
    display_name: &'static str,
    description: &'static str,
    url: &'static str,
    owner: &'static str,
) -> CustomEntry {
    CustomEntry {
        display_name,
        description,
        url,
        owner,
    }
}

pub const CUSTOM_ENTRIES: &[CustomEntry] = &[
    custom("Oberli Pascal", "POB", "pob.socialweb.ch/", "Oberli Pascal"),
    custom("Fonseka Pius", "PIF", "pif.socialweb.ch/", "Fonseka Pius"),
    custom("Flückiger Simon", "SIM", "sim.socialweb.ch/", "Flückiger Simon"),
    custom("Lehmann Sandra", "SAL", "sal.socialweb.ch/", "Lehmann Sandra"),
    custom("Ambrosetti Chiara", "CHA", "cha.socialweb.ch/", "Ambrosetti Chiara"),
    custom("Moix Xenia", "XEM", "xem.socialweb.ch/", "Moix Xenia"),
    custom("Toma Marijana", "MAT", "mat.socialweb.ch/", "Toma Marijana"),
    custom("Daniel Schmocker", "DAS", "das.socialweb.ch/", "Daniel Schmocker"),
    custom("Team", "Team", "team.socialweb.ch/", "Team"),
    custom("Standard", "Standard", "standard.socialweb.ch/", "Standard"),
    custom("Handbuch", "Handbuch", "handbuch.socialweb.ch/", "Handbuch"),
];
