// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use charfind::domain::models::char_name::CharName;
    use charfind::utils::display::render;

    /// 控制台行格式：U+XXXX<TAB><字形><TAB>名称
    #[test]
    fn renders_tab_separated_lines() {
        let given = vec![
            CharName::new(0x3C, "LESS-THAN SIGN"),
            CharName::new(0xAE, "REGISTERED SIGN"),
            CharName::new(0x23D, "LATIN CAPITAL LETTER L WITH BAR"),
        ];

        let mut out = Vec::new();
        render(&mut out, &given).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "U+003C\t<\tLESS-THAN SIGN\n\
             U+00AE\t®\tREGISTERED SIGN\n\
             U+023D\tȽ\tLATIN CAPITAL LETTER L WITH BAR\n"
        );
    }

    /// 码点超过四位十六进制时不截断
    #[test]
    fn renders_wide_code_points() {
        let given = vec![CharName::new(0x1F5A5, "DESKTOP COMPUTER")];

        let mut out = Vec::new();
        render(&mut out, &given).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "U+1F5A5\t\u{1F5A5}\tDESKTOP COMPUTER\n"
        );
    }

    /// 非法标量值退化为替换字符
    #[test]
    fn surrogate_code_points_fall_back_to_replacement() {
        let given = vec![CharName::new(0xD800, "SURROGATE")];

        let mut out = Vec::new();
        render(&mut out, &given).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "U+D800\t\u{FFFD}\tSURROGATE\n"
        );
    }

    /// 空结果渲染为空输出
    #[test]
    fn renders_nothing_for_empty_results() {
        let mut out = Vec::new();
        render(&mut out, &[]).unwrap();

        assert!(out.is_empty());
    }
}
