//! Icon library metadata and the built-in library table.

use serde::Serialize;

/// Metadata describing one icon library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryInfo {
    /// Short lowercase key, e.g. `fa`.
    pub prefix: String,

    /// Display name.
    pub name: String,

    /// One-line description.
    pub description: String,

    /// Declared size of the library. Informational only.
    pub total_icons: u32,

    /// License name.
    pub license: String,

    /// Project homepage.
    pub url: String,
}

impl LibraryInfo {
    pub fn new(
        prefix: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        total_icons: u32,
        license: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            description: description.into(),
            total_icons,
            license: license.into(),
            url: url.into(),
        }
    }

    /// The leading text every icon symbol of this library starts with.
    ///
    /// First character of the prefix upper-cased, second lower-cased, the
    /// rest ignored: `fa` and `fa6` both give `Fa`, `lia` gives `Li`.
    pub fn symbol_stem(&self) -> String {
        symbol_stem(&self.prefix)
    }

    /// Whether `name` is an icon symbol of this library.
    pub fn is_icon_symbol(&self, name: &str) -> bool {
        name.starts_with(&self.symbol_stem())
    }
}

/// See [`LibraryInfo::symbol_stem`].
pub fn symbol_stem(prefix: &str) -> String {
    let mut chars = prefix.chars();
    let mut stem = String::new();
    if let Some(first) = chars.next() {
        stem.extend(first.to_uppercase());
    }
    if let Some(second) = chars.next() {
        stem.extend(second.to_lowercase());
    }
    stem
}

struct LibrarySeed {
    prefix: &'static str,
    name: &'static str,
    description: &'static str,
    total_icons: u32,
    license: &'static str,
    url: &'static str,
}

const fn seed(
    prefix: &'static str,
    name: &'static str,
    description: &'static str,
    total_icons: u32,
    license: &'static str,
    url: &'static str,
) -> LibrarySeed {
    LibrarySeed {
        prefix,
        name,
        description,
        total_icons,
        license,
        url,
    }
}

const LIBRARY_SEEDS: &[LibrarySeed] = &[
    seed("ai", "Ant Design Icons", "Icons from Ant Design", 831, "MIT", "https://github.com/ant-design/ant-design-icons"),
    seed("bs", "Bootstrap Icons", "Icons from Bootstrap", 2716, "MIT", "https://github.com/twbs/icons"),
    seed("bi", "BoxIcons", "High quality web icons", 1634, "MIT", "https://github.com/atisawd/boxicons"),
    seed("ci", "Circum Icons", "Circle-based icons", 288, "MPL-2.0", "https://circumicons.com/"),
    seed("cg", "css.gg", "Pure CSS icons", 704, "MIT", "https://github.com/astrit/css.gg"),
    seed("di", "Devicons", "Developer tool icons", 192, "MIT", "https://vorillaz.github.io/devicons/"),
    seed("fa", "Font Awesome 5", "Popular icon toolkit", 1612, "CC BY 4.0", "https://fontawesome.com/"),
    seed("fa6", "Font Awesome 6", "Latest Font Awesome icons", 2045, "CC BY 4.0", "https://fontawesome.com/"),
    seed("fc", "Flat Color Icons", "Colored flat icons", 329, "MIT", "https://github.com/icons8/flat-color-icons"),
    seed("fi", "Feather", "Simply beautiful icons", 287, "MIT", "https://feathericons.com/"),
    seed("gi", "Game Icons", "Icons for games", 4040, "CC BY 3.0", "https://game-icons.net/"),
    seed("go", "Github Octicons", "GitHub's icons", 264, "MIT", "https://octicons.github.com/"),
    seed("gr", "Grommet-Icons", "Grommet UI icons", 635, "Apache License v2.0", "https://github.com/grommet/grommet-icons"),
    seed("hi", "Heroicons", "Tailwind UI icons", 460, "MIT", "https://github.com/tailwindlabs/heroicons"),
    seed("hi2", "Heroicons 2", "Heroicons v2", 888, "MIT", "https://github.com/tailwindlabs/heroicons"),
    seed("im", "IcoMoon Free", "IcoMoon icon set", 491, "CC BY 4.0", "https://github.com/Keyamoon/IcoMoon-Free"),
    seed("io", "Ionicons 4", "Ionic Framework icons v4", 696, "MIT", "https://ionicons.com/"),
    seed("io5", "Ionicons 5", "Ionic Framework icons v5", 1332, "MIT", "https://ionicons.com/"),
    seed("lia", "Icons8 Line Awesome", "Beautiful icon set", 1544, "MIT", "https://icons8.com/line-awesome"),
    seed("lu", "Lucide", "Fork of Feather Icons", 1215, "ISC", "https://lucide.dev/"),
    seed("md", "Material Design Icons", "Google's Material Design icons", 4341, "Apache License v2.0", "http://google.github.io/material-design-icons/"),
    seed("pi", "Phosphor Icons", "Flexible icon family", 9072, "MIT", "https://github.com/phosphor-icons/core"),
    seed("ri", "Remix Icon", "Neutral-style icon system", 2860, "Apache License v2.0", "https://github.com/Remix-Design/RemixIcon"),
    seed("rx", "Radix Icons", "Radix UI Icon set", 318, "MIT", "https://icons.radix-ui.com"),
    seed("si", "Simple Icons", "Brand icons", 3209, "CC0 1.0 Universal", "https://simpleicons.org/"),
    seed("sl", "Simple Line Icons", "Simple and clean line icons", 189, "MIT", "https://thesabbir.github.io/simple-line-icons/"),
    seed("tb", "Tabler Icons", "Fully customizable icons", 5237, "MIT", "https://github.com/tabler/tabler-icons"),
    seed("tfi", "Themify Icons", "Themify icon set", 352, "MIT", "https://github.com/lykmapipo/themify-icons"),
    seed("ti", "Typicons", "Rounded icon set", 336, "CC BY-SA 3.0", "http://s-ings.com/typicons/"),
    seed("vsc", "VS Code Icons", "Visual Studio Code icons", 461, "CC BY 4.0", "https://github.com/microsoft/vscode-codicons"),
    seed("wi", "Weather Icons", "Weather-themed icons", 219, "SIL OFL 1.1", "https://erikflowers.github.io/weather-icons/"),
];

/// The react-icons libraries known to the server, in display order.
pub fn default_libraries() -> Vec<LibraryInfo> {
    LIBRARY_SEEDS
        .iter()
        .map(|s| LibraryInfo::new(s.prefix, s.name, s.description, s.total_icons, s.license, s.url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_libraries_are_unique() {
        let libraries = default_libraries();
        assert!(libraries.len() > 20);

        let prefixes: HashSet<_> = libraries.iter().map(|l| l.prefix.as_str()).collect();
        assert_eq!(prefixes.len(), libraries.len());
    }

    #[test]
    fn test_default_libraries_order() {
        let libraries = default_libraries();
        assert_eq!(libraries[0].prefix, "ai");
        assert_eq!(libraries.last().unwrap().prefix, "wi");

        let fa = libraries.iter().find(|l| l.prefix == "fa").unwrap();
        assert_eq!(fa.name, "Font Awesome 5");
        let md = libraries.iter().find(|l| l.prefix == "md").unwrap();
        assert_eq!(md.name, "Material Design Icons");
    }

    #[test]
    fn test_symbol_stem_regular_prefixes() {
        assert_eq!(symbol_stem("fa"), "Fa");
        assert_eq!(symbol_stem("md"), "Md");
        assert_eq!(symbol_stem("ai"), "Ai");
        assert_eq!(symbol_stem("wi"), "Wi");
    }

    #[test]
    fn test_symbol_stem_irregular_prefixes() {
        // Every prefix in the table that is not exactly two letters.
        let irregular: Vec<_> = default_libraries()
            .into_iter()
            .filter(|l| l.prefix.len() != 2)
            .map(|l| l.prefix)
            .collect();
        assert_eq!(irregular, vec!["fa6", "hi2", "io5", "lia", "tfi", "vsc"]);

        assert_eq!(symbol_stem("fa6"), "Fa");
        assert_eq!(symbol_stem("hi2"), "Hi");
        assert_eq!(symbol_stem("io5"), "Io");
        assert_eq!(symbol_stem("lia"), "Li");
        assert_eq!(symbol_stem("tfi"), "Tf");
        assert_eq!(symbol_stem("vsc"), "Vs");
    }

    #[test]
    fn test_symbol_stem_short_inputs() {
        assert_eq!(symbol_stem(""), "");
        assert_eq!(symbol_stem("x"), "X");
        assert_eq!(symbol_stem("FA"), "Fa");
    }

    #[test]
    fn test_is_icon_symbol() {
        let libraries = default_libraries();
        let find = |p: &str| libraries.iter().find(|l| l.prefix == p).unwrap().clone();

        assert!(find("fa").is_icon_symbol("FaUser"));
        assert!(!find("fa").is_icon_symbol("someUtil"));
        assert!(!find("fa").is_icon_symbol("FAUser"));
        assert!(find("fa6").is_icon_symbol("FaUser"));
        assert!(!find("fa6").is_icon_symbol("FA6User"));
        assert!(find("hi2").is_icon_symbol("HiOutlineHome"));
        assert!(find("io5").is_icon_symbol("IoAdd"));
        assert!(find("lia").is_icon_symbol("LiaAtomSolid"));
        assert!(find("tfi").is_icon_symbol("TfiAgenda"));
        assert!(find("vsc").is_icon_symbol("VscAccount"));
    }
}
