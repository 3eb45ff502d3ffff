// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::char_name::CharName;
use std::io::{self, Write};

/// 将结果序列渲染为纯文本行
///
/// 每个条目一行：`U+XXXX<TAB><字形><TAB>名称`，码点十六进制
/// 至少四位。码点不是合法标量值时字形退化为 U+FFFD。
///
/// # 参数
///
/// * `out` - 输出目的地
/// * `char_names` - 按数据集顺序排列的结果序列
pub fn render<W: Write>(out: &mut W, char_names: &[CharName]) -> io::Result<()> {
    for char_name in char_names {
        writeln!(
            out,
            "U+{:04X}\t{}\t{}",
            char_name.char,
            glyph(char_name.char),
            char_name.name
        )?;
    }
    Ok(())
}

/// 将结果序列打印到标准输出
pub fn display(char_names: &[CharName]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render(&mut handle, char_names)
}

fn glyph(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
