//! 格式化日期相關功能
//!
//! 月名、日名、干支均輸出簡體字形（如「闰」「腊」）。

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 十天干，自「甲」起。
pub const HEAVENLY_STEMS: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 十二地支，自「子」起。
pub const EARTHLY_BRANCHES: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 取得所給年份的天干。公元 4 年為甲，每十年一輪。
///
/// # 用例
///
/// ```
/// use nongli::chinese::fmt;
///
/// assert_eq!("甲", fmt::heavenly_stem(1984));
/// assert_eq!("癸", fmt::heavenly_stem(1983));
/// ```
pub fn heavenly_stem(year: i32) -> &'static str {
    HEAVENLY_STEMS[(year - 4).rem_euclid(10) as usize]
}

/// 取得所給年份的地支。公元 4 年為子，每十二年一輪。
///
/// # 用例
///
/// ```
/// use nongli::chinese::fmt;
///
/// assert_eq!("子", fmt::earthly_branch(1984));
/// assert_eq!("亥", fmt::earthly_branch(1983));
/// ```
pub fn earthly_branch(year: i32) -> &'static str {
    EARTHLY_BRANCHES[(year - 4).rem_euclid(12) as usize]
}

/// 取得年名，即干支加「年」字。
///
/// # 用例
///
/// ```
/// use nongli::chinese::fmt;
///
/// assert_eq!("庚寅年", fmt::year_name(1950));
/// ```
pub fn year_name(year: i32) -> String {
    format!("{}{}年", heavenly_stem(year), earthly_branch(year))
}

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    let idx = (num + 59) % 60;
    HEAVENLY_STEMS[(idx % 10) as usize].to_owned() + EARTHLY_BRANCHES[(idx % 12) as usize]
}

/// 取得月名（含「月」字）。正月稱「正月」，十一、十二月稱「冬月」「腊月」，閏月加「闰」字。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

#[cfg(test)]
mod tests {
    use super::super::Month::*;
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_year_name() {
        for (std, year) in [
            ("庚寅年", 1950),
            ("癸巳年", 1953),
            ("癸卯年", 1963),
            ("癸亥年", 1983),
            ("甲子年", 1984),
            ("庚辰年", 2000),
            ("丁酉年", 2017),
            ("甲辰年", 2024),
            ("庚申年", 2100),
        ] {
            assert_eq!(std, year_name(year));
        }
    }

    #[test]
    fn stem_branch_cycle() {
        for year in 1950..=2100 {
            assert_eq!(heavenly_stem(year), heavenly_stem(year + 10));
            assert_eq!(earthly_branch(year), earthly_branch(year + 12));
            assert_ne!(heavenly_stem(year), heavenly_stem(year + 1));
            assert_ne!(earthly_branch(year), earthly_branch(year + 1));
        }
    }

    #[test]
    fn test_month() {
        for (std, m) in [
            ("正月", Common(1)),
            ("二月", Common(2)),
            ("十月", Common(10)),
            ("腊月", Common(12)),
            ("闰六月", Leap(6)),
            ("闰冬月", Leap(11)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("十九", 19),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
        for d in 1..=30 {
            assert_eq!(2, day(d).chars().count());
        }
    }
}
