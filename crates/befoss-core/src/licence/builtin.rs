//! Built-in licences
//!
//! The GPLv3 and MPL 2.0 texts are bundled at compile time. The MIT text and the GPL
//! short notice are generated from the collected identity.

use super::{Category, Licence};

const GPLV3_TEXT: &str = include_str!("../../licences/gplv3.txt");
const MPL_TEXT: &str = include_str!("../../licences/mpl.txt");

/// Values substituted into the built-in licence texts
#[derive(Debug, Clone)]
pub struct NoticeContext {
    pub year: i32,
    pub author: String,
    pub program: String,
    pub description: String,
    pub email: String,
}

/// Selectable built-in licences as (label, key), in display order
pub const BUILTIN_OPTIONS: [(&str, &str); 3] = [
    ("Gnu Public Licence, feel the hurd", "gpl"),
    ("MIT, KISS principled", "mit"),
    ("MPL, I HAVE MIDDLE GROUND!", "mpl"),
];

/// Build the MIT, GPLv3 and MPL entries
pub fn builtin_licences(ctx: &NoticeContext) -> Vec<Licence> {
    vec![
        Licence {
            key: "mit".to_string(),
            name: "MIT".to_string(),
            content: mit_text(ctx),
            short_notice: String::new(),
            category: Category::Open,
        },
        Licence {
            key: "gpl".to_string(),
            name: "GPLv3".to_string(),
            content: GPLV3_TEXT.to_string(),
            short_notice: gpl_short_notice(ctx),
            category: Category::Foss,
        },
        Licence {
            key: "mpl".to_string(),
            name: "MPLv2".to_string(),
            content: MPL_TEXT.to_string(),
            short_notice: String::new(),
            category: Category::Open,
        },
    ]
}

fn mit_text(ctx: &NoticeContext) -> String {
    format!(
        "MIT License

Copyright (c) {} {}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
",
        ctx.year, ctx.author
    )
}

/// The "how to apply these terms" notice from the GPLv3 appendix
pub fn gpl_short_notice(ctx: &NoticeContext) -> String {
    format!(
        "    {}: {}
    Copyright (C) {} {}

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.

    You can contact me at {}.
",
        ctx.program, ctx.description, ctx.year, ctx.author, ctx.email
    )
}
