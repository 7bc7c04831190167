use crate::license::spdx::LicenseId;
use crate::license::text::{head, normalize_text};

/// Window for front-loaded titles and the permissive grant paragraphs.
const SHORT_WINDOW: usize = 1000;
/// MPL titles sit on the very first line.
const TITLE_WINDOW: usize = 300;
/// CC and LGPL titles can follow a long preamble.
const LONG_WINDOW: usize = 3000;

// Phrase tables are stored already whitespace-normalized.

const APACHE2_TITLES: &[&str] = &[
    "Apache License Version 2.0",
    "Apache License, Version 2.0",
    "Apache License ============== _Version 2.0, January 2004_",
];

const MIT_GRANTS: &[&str] = &[
    "Permission is hereby granted, free of charge, to any person obtaining a copy of this \
     software and associated documentation files (the \"Software\"), to deal in the Software \
     without restriction, including without limitation the rights to use, copy, modify, merge, \
     publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons \
     to whom the Software is furnished to do so, subject to the following conditions: The above \
     copyright notice and this permission notice shall be included in all copies or substantial \
     portions of the Software.",
    "Permission to use, copy, modify, and distribute this software for any purpose with or \
     without fee is hereby granted, provided that the above copyright notice and this permission \
     notice appear in all copies.",
];

const BSD_REDISTRIBUTION: &[&str] = &[
    "Redistribution and use in source and binary forms, with or without modification, are \
     permitted provided that the following conditions are met:",
    "Redistributions of source code must retain the above copyright notice, this list of \
     conditions and the following disclaimer.",
    "Redistributions in binary form must reproduce the above copyright notice, this list of \
     conditions and the following disclaimer in the documentation and/or other materials \
     provided with the distribution.",
];

const BSD_ENDORSEMENT: &[&str] = &[
    "Neither the name of",
    "nor the names of its contributors may be used to endorse or promote products derived \
     from this software without specific prior written permission.",
];

const BSD_ADVERTISING: &[&str] = &[
    "All advertising materials mentioning features or use of this software must display the \
     following acknowledgement",
];

const MPL2_TITLES: &[&str] = &[
    "Mozilla Public License Version 2.0",
    "Mozilla Public License, version 2.0",
];

const CC_BY_SA4_TITLES: &[&str] = &["Creative Commons Attribution-ShareAlike 4.0 International"];

const LGPL3_TITLES: &[&str] = &["GNU LESSER GENERAL PUBLIC LICENSE Version 3"];

fn any_in(window: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| window.contains(p))
}

fn all_in(window: &str, phrases: &[&str]) -> bool {
    phrases.iter().all(|p| window.contains(p))
}

/// Identify the license family of a raw license file body.
///
/// Rules are tried in a fixed order and the first hit wins:
/// Apache-2.0, MIT, the BSD family, MPL-2.0, CC-BY-SA-4.0, LGPL-3.0.
/// Each rule only looks at a prefix of the normalized text so that license
/// names quoted further down a file do not trigger a match.
pub fn classify_text(raw: &str) -> LicenseId {
    let content = normalize_text(raw);
    let short = head(&content, SHORT_WINDOW);

    if any_in(short, APACHE2_TITLES) {
        return LicenseId::Apache2;
    }
    if any_in(short, MIT_GRANTS) {
        return LicenseId::Mit;
    }
    if all_in(short, BSD_REDISTRIBUTION) {
        if !all_in(short, BSD_ENDORSEMENT) {
            return LicenseId::Bsd2Clause;
        }
        if all_in(short, BSD_ADVERTISING) {
            return LicenseId::Bsd4Clause;
        }
        return LicenseId::Bsd3Clause;
    }
    if any_in(head(&content, TITLE_WINDOW), MPL2_TITLES) {
        return LicenseId::Mpl2;
    }

    let long = head(&content, LONG_WINDOW);
    if any_in(long, CC_BY_SA4_TITLES) {
        return LicenseId::CcBySa4;
    }
    if any_in(long, LGPL3_TITLES) {
        return LicenseId::Lgpl3;
    }

    LicenseId::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    const BSD_HEAD: &str = "Copyright (c) 2012 The Authors. All rights reserved.

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are
met:

   * Redistributions of source code must retain the above copyright
notice, this list of conditions and the following disclaimer.
   * Redistributions in binary form must reproduce the above
copyright notice, this list of conditions and the following disclaimer
in the documentation and/or other materials provided with the
distribution.
";

    const BSD_ENDORSE: &str = "   * Neither the name of Example Inc. nor the names of its
contributors may be used to endorse or promote products derived from
this software without specific prior written permission.
";

    const BSD_ADVERT: &str = "   * All advertising materials mentioning features or use of this software
     must display the following acknowledgement: This product includes
     software developed by Example.
";

    const MIT_TEXT: &str = "The MIT License (MIT)

Copyright (c) 2014 Someone

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \u{201C}Software\u{201D}), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.
";

    #[test]
    fn test_apache_titles() {
        assert_eq!(
            classify_text("\n                Apache License\n           Version 2.0, January 2004\n"),
            LicenseId::Apache2
        );
        assert_eq!(
            classify_text("Licensed under the Apache License, Version 2.0 (the \"License\");"),
            LicenseId::Apache2
        );
        assert_eq!(
            classify_text("Apache License\n==============\n\n_Version 2.0, January 2004_\n"),
            LicenseId::Apache2
        );
    }

    #[test]
    fn test_apache_ignores_trailing_content() {
        let text = format!("Apache License, Version 2.0\n{}", MIT_TEXT.repeat(5));
        assert_eq!(classify_text(&text), LicenseId::Apache2);
    }

    #[test]
    fn test_apache_title_outside_window() {
        let text = format!("{}Apache License, Version 2.0", "x ".repeat(600));
        assert_eq!(classify_text(&text), LicenseId::Unknown);
    }

    #[test]
    fn test_mit_with_smart_quotes() {
        assert_eq!(classify_text(MIT_TEXT), LicenseId::Mit);
    }

    #[test]
    fn test_isc_style_grant_is_mit() {
        let text = "Copyright (c) 2015\n\nPermission to use, copy, modify, and distribute this software for any\npurpose with or without fee is hereby granted, provided that the above\ncopyright notice and this permission notice appear in all copies.\n";
        assert_eq!(classify_text(text), LicenseId::Mit);
    }

    #[test]
    fn test_bsd_two_clause() {
        assert_eq!(classify_text(BSD_HEAD), LicenseId::Bsd2Clause);
    }

    #[test]
    fn test_bsd_three_clause() {
        let text = format!("{BSD_HEAD}{BSD_ENDORSE}");
        assert_eq!(classify_text(&text), LicenseId::Bsd3Clause);
    }

    #[test]
    fn test_bsd_four_clause() {
        let text = format!("{BSD_HEAD}{BSD_ADVERT}{BSD_ENDORSE}");
        assert_eq!(classify_text(&text), LicenseId::Bsd4Clause);
    }

    #[test]
    fn test_bsd_needs_every_redistribution_clause() {
        let text = BSD_HEAD.replace("Redistributions in binary form", "Binary forms");
        assert_eq!(classify_text(&text), LicenseId::Unknown);
    }

    #[test]
    fn test_mpl_title_window() {
        assert_eq!(
            classify_text("Mozilla Public License Version 2.0\n==================================\n"),
            LicenseId::Mpl2
        );
        let late = format!("{}Mozilla Public License, version 2.0", "y ".repeat(200));
        assert_eq!(classify_text(&late), LicenseId::Unknown);
    }

    #[test]
    fn test_cc_and_lgpl() {
        let cc = format!(
            "{}Creative Commons Attribution-ShareAlike 4.0 International Public License",
            "preamble ".repeat(100)
        );
        assert_eq!(classify_text(&cc), LicenseId::CcBySa4);

        let lgpl = "                   GNU LESSER GENERAL PUBLIC LICENSE\n                       Version 3, 29 June 2007\n";
        assert_eq!(classify_text(lgpl), LicenseId::Lgpl3);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_text(""), LicenseId::Unknown);
        assert_eq!(
            classify_text("This code is released into the public domain."),
            LicenseId::Unknown
        );
    }
}
