//! 農曆年表數據
//!
//! 每年一條記錄，涵蓋農曆 [`BASE_YEAR`] 至 [`MAX_YEAR`] 年。記錄的月份大小以位元打包，
//! 解碼規則見 [`YearRecord::month_lengths`]。

use crate::date::Date;

/// 年表首年
pub const BASE_YEAR: i32 = 1950;
/// 年表末年
pub const MAX_YEAR: i32 = 2100;
/// 曆元，即公曆 1950 年 2 月 17 日（農曆 1950 年正月初一）的 JDN。
pub const EPOCH_JDN: u32 = 2433330;

/// 曆元日期，見 [`EPOCH_JDN`]。
pub fn epoch() -> Date {
    Date::from_jdn(EPOCH_JDN)
}

/// 一年的年表記錄
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearRecord {
    /// 閏月序號，0 表示該年無閏月
    pub leap_month: u32,
    /// 正月初一所在公曆月
    pub new_year_month: u32,
    /// 正月初一所在公曆日
    pub new_year_day: u32,
    /// 各月大小，16 位中自最高位起取 12 或 13 位，1 為大月（30 日），0 為小月（29 日）
    pub month_bits: u16,
}

impl YearRecord {
    const fn new(leap_month: u32, new_year_month: u32, new_year_day: u32, month_bits: u16) -> Self {
        Self {
            leap_month,
            new_year_month,
            new_year_day,
            month_bits,
        }
    }

    /// 取得農曆 `year` 年的記錄。
    ///
    /// 年表無該年則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::table::YearRecord;
    ///
    /// assert_eq!(6, YearRecord::get(2017).unwrap().leap_month);
    /// assert!(YearRecord::get(1949).is_none());
    /// ```
    pub fn get(year: i32) -> Option<&'static Self> {
        let idx = usize::try_from(year.checked_sub(BASE_YEAR)?).ok()?;
        TABLE.get(idx)
    }

    /// 該年月數，有閏月為 13，否則為 12。
    pub fn month_count(&self) -> usize {
        if self.leap_month != 0 { 13 } else { 12 }
    }

    /// 依序取得各月日數（含閏月），自 `month_bits` 最高位讀起。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::table::YearRecord;
    ///
    /// let months = YearRecord::get(1950).unwrap().month_lengths();
    /// assert_eq!(vec![29, 30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29], months);
    /// ```
    pub fn month_lengths(&self) -> Vec<u32> {
        (0..self.month_count())
            .map(|i| {
                if (self.month_bits >> (15 - i)) & 1 == 1 {
                    30
                } else {
                    29
                }
            })
            .collect()
    }

    /// 該年總日數
    pub fn days(&self) -> u32 {
        let mask = !(u16::MAX >> self.month_count());
        29 * self.month_count() as u32 + (self.month_bits & mask).count_ones()
    }
}

static TABLE: [YearRecord; (MAX_YEAR - BASE_YEAR + 1) as usize] = [
    YearRecord::new(0, 2, 17, 0x6ca0), // 1950
    YearRecord::new(0, 2, 6, 0xb550), // 1951
    YearRecord::new(5, 1, 27, 0x55a8), // 1952
    YearRecord::new(0, 2, 14, 0x4da0), // 1953
    YearRecord::new(0, 2, 3, 0xa5b0), // 1954
    YearRecord::new(3, 1, 24, 0x52b8), // 1955
    YearRecord::new(0, 2, 12, 0x52b0), // 1956
    YearRecord::new(8, 1, 31, 0xa950), // 1957
    YearRecord::new(0, 2, 18, 0xe950), // 1958
    YearRecord::new(0, 2, 8, 0x6aa0), // 1959
    YearRecord::new(6, 1, 28, 0xad50), // 1960
    YearRecord::new(0, 2, 15, 0xab50), // 1961
    YearRecord::new(0, 2, 5, 0x4b60), // 1962
    YearRecord::new(4, 1, 25, 0xa570), // 1963
    YearRecord::new(0, 2, 13, 0xa570), // 1964
    YearRecord::new(0, 2, 2, 0x5260), // 1965
    YearRecord::new(3, 1, 21, 0xe930), // 1966
    YearRecord::new(0, 2, 9, 0xd950), // 1967
    YearRecord::new(7, 1, 30, 0x5aa8), // 1968
    YearRecord::new(0, 2, 17, 0x56a0), // 1969
    YearRecord::new(0, 2, 6, 0x96d0), // 1970
    YearRecord::new(5, 1, 27, 0x4ae8), // 1971
    YearRecord::new(0, 2, 15, 0x4ad0), // 1972
    YearRecord::new(0, 2, 3, 0xa4d0), // 1973
    YearRecord::new(4, 1, 23, 0xd268), // 1974
    YearRecord::new(0, 2, 11, 0xd250), // 1975
    YearRecord::new(8, 1, 31, 0xd528), // 1976
    YearRecord::new(0, 2, 18, 0xb540), // 1977
    YearRecord::new(0, 2, 7, 0xb6a0), // 1978
    YearRecord::new(6, 1, 28, 0x96d0), // 1979
    YearRecord::new(0, 2, 16, 0x95b0), // 1980
    YearRecord::new(0, 2, 5, 0x49b0), // 1981
    YearRecord::new(4, 1, 25, 0xa4b8), // 1982
    YearRecord::new(0, 2, 13, 0xa4b0), // 1983
    YearRecord::new(10, 2, 2, 0xb258), // 1984
    YearRecord::new(0, 2, 20, 0x6a50), // 1985
    YearRecord::new(0, 2, 9, 0x6d40), // 1986
    YearRecord::new(6, 1, 29, 0xada0), // 1987
    YearRecord::new(0, 2, 17, 0xab60), // 1988
    YearRecord::new(0, 2, 6, 0x9570), // 1989
    YearRecord::new(5, 1, 27, 0x4978), // 1990
    YearRecord::new(0, 2, 15, 0x4970), // 1991
    YearRecord::new(0, 2, 4, 0x64b0), // 1992
    YearRecord::new(3, 1, 23, 0x6a50), // 1993
    YearRecord::new(0, 2, 10, 0xea50), // 1994
    YearRecord::new(8, 1, 31, 0x6b28), // 1995
    YearRecord::new(0, 2, 19, 0x5ac0), // 1996
    YearRecord::new(0, 2, 7, 0xab60), // 1997
    YearRecord::new(5, 1, 28, 0x9368), // 1998
    YearRecord::new(0, 2, 16, 0x92e0), // 1999
    YearRecord::new(0, 2, 5, 0xc960), // 2000
    YearRecord::new(4, 1, 24, 0xd4a8), // 2001
    YearRecord::new(0, 2, 12, 0xd4a0), // 2002
    YearRecord::new(0, 2, 1, 0xda50), // 2003
    YearRecord::new(2, 1, 22, 0x5aa8), // 2004
    YearRecord::new(0, 2, 9, 0x56a0), // 2005
    YearRecord::new(7, 1, 29, 0xaad8), // 2006
    YearRecord::new(0, 2, 18, 0x25d0), // 2007
    YearRecord::new(0, 2, 7, 0x92d0), // 2008
    YearRecord::new(5, 1, 26, 0xc958), // 2009
    YearRecord::new(0, 2, 14, 0xa950), // 2010
    YearRecord::new(0, 2, 3, 0xb4a0), // 2011
    YearRecord::new(4, 1, 23, 0xb550), // 2012
    YearRecord::new(0, 2, 10, 0xad50), // 2013
    YearRecord::new(9, 1, 31, 0x55a8), // 2014
    YearRecord::new(0, 2, 19, 0x4ba0), // 2015
    YearRecord::new(0, 2, 8, 0xa5b0), // 2016
    YearRecord::new(6, 1, 28, 0x52b8), // 2017
    YearRecord::new(0, 2, 16, 0x52b0), // 2018
    YearRecord::new(0, 2, 5, 0xa930), // 2019
    YearRecord::new(4, 1, 25, 0x74a8), // 2020
    YearRecord::new(0, 2, 12, 0x6aa0), // 2021
    YearRecord::new(0, 2, 1, 0xad50), // 2022
    YearRecord::new(2, 1, 22, 0x4da8), // 2023
    YearRecord::new(0, 2, 10, 0x4b60), // 2024
    YearRecord::new(6, 1, 29, 0xa570), // 2025
    YearRecord::new(0, 2, 17, 0xa4e0), // 2026
    YearRecord::new(0, 2, 6, 0xd260), // 2027
    YearRecord::new(5, 1, 26, 0xe930), // 2028
    YearRecord::new(0, 2, 13, 0xd530), // 2029
    YearRecord::new(0, 2, 3, 0x5aa0), // 2030
    YearRecord::new(3, 1, 23, 0x6b50), // 2031
    YearRecord::new(0, 2, 11, 0x96d0), // 2032
    YearRecord::new(11, 1, 31, 0x4ae8), // 2033
    YearRecord::new(0, 2, 19, 0x4ad0), // 2034
    YearRecord::new(0, 2, 8, 0xa4d0), // 2035
    YearRecord::new(6, 1, 28, 0xd258), // 2036
    YearRecord::new(0, 2, 15, 0xd250), // 2037
    YearRecord::new(0, 2, 4, 0xd520), // 2038
    YearRecord::new(5, 1, 24, 0xdaa0), // 2039
    YearRecord::new(0, 2, 12, 0xb5a0), // 2040
    YearRecord::new(0, 2, 1, 0x56d0), // 2041
    YearRecord::new(2, 1, 22, 0x4ad8), // 2042
    YearRecord::new(0, 2, 10, 0x49b0), // 2043
    YearRecord::new(7, 1, 30, 0xa4b8), // 2044
    YearRecord::new(0, 2, 17, 0xa4b0), // 2045
    YearRecord::new(0, 2, 6, 0xaa50), // 2046
    YearRecord::new(5, 1, 26, 0xb528), // 2047
    YearRecord::new(0, 2, 14, 0x6d20), // 2048
    YearRecord::new(0, 2, 2, 0xada0), // 2049
    YearRecord::new(3, 1, 23, 0x55b0), // 2050
    YearRecord::new(0, 2, 11, 0x9370), // 2051
    YearRecord::new(8, 2, 1, 0x4978), // 2052
    YearRecord::new(0, 2, 19, 0x4970), // 2053
    YearRecord::new(0, 2, 8, 0x64b0), // 2054
    YearRecord::new(6, 1, 28, 0x6a50), // 2055
    YearRecord::new(0, 2, 15, 0xea50), // 2056
    YearRecord::new(0, 2, 4, 0x6b20), // 2057
    YearRecord::new(4, 1, 24, 0xab60), // 2058
    YearRecord::new(0, 2, 12, 0xaae0), // 2059
    YearRecord::new(0, 2, 2, 0x92e0), // 2060
    YearRecord::new(3, 1, 21, 0xc970), // 2061
    YearRecord::new(0, 2, 9, 0xc960), // 2062
    YearRecord::new(7, 1, 29, 0xd4a8), // 2063
    YearRecord::new(0, 2, 17, 0xd4a0), // 2064
    YearRecord::new(0, 2, 5, 0xda50), // 2065
    YearRecord::new(5, 1, 26, 0x5aa8), // 2066
    YearRecord::new(0, 2, 14, 0x56a0), // 2067
    YearRecord::new(0, 2, 3, 0xa6d0), // 2068
    YearRecord::new(4, 1, 23, 0x52e8), // 2069
    YearRecord::new(0, 2, 11, 0x52d0), // 2070
    YearRecord::new(8, 1, 31, 0xa958), // 2071
    YearRecord::new(0, 2, 19, 0xa950), // 2072
    YearRecord::new(0, 2, 7, 0xb4a0), // 2073
    YearRecord::new(6, 1, 27, 0xb550), // 2074
    YearRecord::new(0, 2, 15, 0xad50), // 2075
    YearRecord::new(0, 2, 5, 0x55a0), // 2076
    YearRecord::new(4, 1, 24, 0xa5d0), // 2077
    YearRecord::new(0, 2, 12, 0xa5b0), // 2078
    YearRecord::new(0, 2, 2, 0x52b0), // 2079
    YearRecord::new(3, 1, 22, 0xa938), // 2080
    YearRecord::new(0, 2, 9, 0x6930), // 2081
    YearRecord::new(7, 1, 29, 0x7298), // 2082
    YearRecord::new(0, 2, 17, 0x6aa0), // 2083
    YearRecord::new(0, 2, 6, 0xad50), // 2084
    YearRecord::new(5, 1, 26, 0x4da8), // 2085
    YearRecord::new(0, 2, 14, 0x4b60), // 2086
    YearRecord::new(0, 2, 3, 0xa570), // 2087
    YearRecord::new(4, 1, 24, 0x5270), // 2088
    YearRecord::new(0, 2, 10, 0xd260), // 2089
    YearRecord::new(8, 1, 30, 0xe930), // 2090
    YearRecord::new(0, 2, 18, 0xd520), // 2091
    YearRecord::new(0, 2, 7, 0xdaa0), // 2092
    YearRecord::new(6, 1, 27, 0x6b50), // 2093
    YearRecord::new(0, 2, 15, 0x56d0), // 2094
    YearRecord::new(0, 2, 5, 0x4ae0), // 2095
    YearRecord::new(4, 1, 25, 0xa4e8), // 2096
    YearRecord::new(0, 2, 12, 0xa4d0), // 2097
    YearRecord::new(0, 2, 1, 0xd150), // 2098
    YearRecord::new(2, 1, 21, 0xd928), // 2099
    YearRecord::new(0, 2, 9, 0xd520), // 2100
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(YearRecord::get(BASE_YEAR - 1).is_none());
        assert!(YearRecord::get(BASE_YEAR).is_some());
        assert!(YearRecord::get(MAX_YEAR).is_some());
        assert!(YearRecord::get(MAX_YEAR + 1).is_none());
        assert!(YearRecord::get(i32::MIN).is_none());
    }

    #[test]
    fn epoch_date() {
        assert_eq!((1950, 2, 17), epoch().gregorian());
        let rec = YearRecord::get(BASE_YEAR).unwrap();
        assert_eq!((2, 17), (rec.new_year_month, rec.new_year_day));
    }

    #[test]
    fn decode() {
        let dataset = [
            (1950, 354, vec![29, 30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29]),
            (1965, 353, vec![29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
            (
                2017,
                384,
                vec![29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30],
            ),
            (2100, 354, vec![30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29]),
        ];
        for (year, days, months) in dataset {
            let rec = YearRecord::get(year).unwrap();
            assert_eq!(months, rec.month_lengths(), "{year}");
            assert_eq!(days, rec.days(), "{year}");
        }
    }

    #[test]
    fn days_match_month_lengths() {
        for rec in &TABLE {
            assert_eq!(rec.month_lengths().iter().sum::<u32>(), rec.days());
            assert!(rec.leap_month <= 12);
        }
    }
}
