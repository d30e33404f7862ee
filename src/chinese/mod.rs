//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製好的農曆年表編算公曆與農曆的互換，見 [`table`]。支持農曆
//! 1950 年正月初一（公曆 1950 年 2 月 17 日）至 2100 年末。

use tracing::{debug, trace};

use crate::date::{Date, SolarDate};
use crate::error::{Error, Field, Result, check};
use table::{BASE_YEAR, MAX_YEAR, YearRecord};

pub mod fmt;
pub mod table;

/// 月名，`Common` 為平月，`Leap` 為閏月。閏月與其前一平月同序號。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }

    /// 依年表中的月份位置（自 1 起，含閏月）取得月名。
    ///
    /// `leap` 為該年閏月序號，0 表示無閏月。閏月排在其同序號平月之後，故位置大於
    /// `leap` 者序號減一，減後恰等於 `leap` 者即為閏月。
    fn from_position(pos: u32, leap: u32) -> Self {
        if leap != 0 && pos > leap {
            if pos - 1 == leap {
                Month::Leap(leap)
            } else {
                Month::Common(pos - 1)
            }
        } else {
            Month::Common(pos)
        }
    }
    /// [`Month::from_position`] 的逆運算。
    fn position(&self, leap: u32) -> u32 {
        match *self {
            Month::Leap(n) => n + 1,
            Month::Common(n) if leap != 0 && n > leap => n + 1,
            Month::Common(n) => n,
        }
    }
}

/// 取得農曆 `year` 年的總日數及依序各月日數（有閏月則為 13 項）。
///
/// 年表無該年則返回 `None`。
///
/// # 用例
///
/// ```
/// use nongli::chinese::decode_year;
///
/// let (days, months) = decode_year(2017).unwrap();
/// assert_eq!(384, days);
/// assert_eq!(13, months.len());
/// ```
pub fn decode_year(year: i32) -> Option<(u32, Vec<u32>)> {
    let record = YearRecord::get(year)?;
    let months = record.month_lengths();
    let days = months.iter().sum();
    trace!(year, days, months = months.len(), "decoded lunar year");
    Some((days, months))
}

/// 一個農曆年，包括該年各月的月名、日數及首日。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{LunarYear, Month::*};
///
/// let year = LunarYear::new(2017).unwrap();
/// assert_eq!(Some(6), year.leap_month());
/// assert_eq!(Leap(6), year.months[6].month);
/// assert_eq!(Date::from_gregorian(2017, 7, 23), Some(year.months[6].first_day));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 農曆年序號
    pub year: i32,
    /// 該年的年表記錄
    pub record: &'static YearRecord,
    /// 全部月份，依曆序排列
    pub months: Vec<LunarMonth>,
}

/// 月份信息
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LunarMonth {
    /// 月名
    pub month: Month,
    /// 日數，29 或 30
    pub days: u32,
    /// 初一所在日期
    pub first_day: Date,
}

impl LunarYear {
    /// 取得農曆 `year` 年。
    ///
    /// 若年表無該年資料則返回 `None`。
    pub fn new(year: i32) -> Option<Self> {
        let record = YearRecord::get(year)?;
        let mut first_day = table::epoch() + days_before(year) as i32;
        let months = (1..)
            .zip(record.month_lengths())
            .map(|(pos, days)| {
                let month = LunarMonth {
                    month: Month::from_position(pos, record.leap_month),
                    days,
                    first_day,
                };
                first_day = first_day + days as i32;
                month
            })
            .collect();
        Some(LunarYear {
            year,
            record,
            months,
        })
    }
    /// 該年總日數
    pub fn days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }
    /// 閏月序號，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.record.leap_month {
            0 => None,
            n => Some(n),
        }
    }
    /// 正月初一所在日期
    pub fn first_day(&self) -> Date {
        self.months[0].first_day
    }
}

/// 自 [`BASE_YEAR`] 年正月初一至 `year` 年正月初一的日數。
fn days_before(year: i32) -> u32 {
    (BASE_YEAR..year)
        .rev()
        .filter_map(YearRecord::get)
        .map(YearRecord::days)
        .sum()
}

/// 年表涵蓋的總日數
fn days_total() -> u32 {
    days_before(MAX_YEAR + 1)
}

/// 農曆日期
///
/// 干支、年名、月名、日名均由數值欄位即時推得，見各方法。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{LunarDate, Month::*};
///
/// let date = LunarDate::new(2017, Leap(6), 1);
/// assert_eq!("2017-06-01", date.to_string());
/// assert_eq!("丁酉年 闰六月初一", date.chinese());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// 農曆年序號
    pub year: i32,
    /// 月名
    pub month: Month,
    /// 日序號，自 1 起
    pub day: u32,
}

impl LunarDate {
    pub fn new(year: i32, month: Month, day: u32) -> Self {
        Self { year, month, day }
    }

    /// 取得給定日期對應的農曆日期。
    ///
    /// 早於曆元或晚於年表末日則回報 [`Field::Offset`] 錯誤。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Date;
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(Ok(LunarDate::new(1999, Common(11), 25)), LunarDate::from_date(date));
    /// ```
    pub fn from_date(date: Date) -> Result<Self> {
        let total = days_total();
        let offset = date - table::epoch();
        check(Field::Offset, offset.into(), 0, i64::from(total) - 1)?;

        let mut rest = offset as u32;
        let mut year = BASE_YEAR;
        let record = loop {
            let record = YearRecord::get(year).ok_or(Error::OutOfRange {
                field: Field::Offset,
                value: offset.into(),
                min: 0,
                max: i64::from(total) - 1,
            })?;
            let days = record.days();
            if rest < days {
                break record;
            }
            rest -= days;
            year += 1;
        };

        let mut pos = 1;
        for len in record.month_lengths() {
            if rest < len {
                break;
            }
            rest -= len;
            pos += 1;
        }
        let lunar = LunarDate {
            year,
            month: Month::from_position(pos, record.leap_month),
            day: rest + 1,
        };
        trace!(offset, %lunar, leap = lunar.month.is_leap(), "resolved lunar date");
        Ok(lunar)
    }

    /// 取得該農曆日期對應的日期。
    ///
    /// 日序號可為 `0..=31`，超出該月日數者順延至次月，與公曆欄位的處理一致。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Date;
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let lunar = LunarDate::new(1950, Common(1), 1);
    /// assert_eq!(Date::from_gregorian(1950, 2, 17), lunar.to_date().ok());
    /// ```
    pub fn to_date(&self) -> Result<Date> {
        check(Field::Year, self.year.into(), BASE_YEAR.into(), MAX_YEAR.into())?;
        check(Field::Month, self.month.num().into(), 1, 12)?;
        check(Field::Day, self.day.into(), 0, 31)?;
        let record = YearRecord::get(self.year).ok_or(Error::OutOfRange {
            field: Field::Year,
            value: self.year.into(),
            min: BASE_YEAR.into(),
            max: MAX_YEAR.into(),
        })?;
        if let Month::Leap(n) = self.month {
            let leap: i64 = record.leap_month.into();
            check(Field::LeapMonth, n.into(), leap, leap)?;
        }

        let pos = self.month.position(record.leap_month) as usize;
        let in_year: u32 = record.month_lengths()[..pos - 1].iter().sum();
        let offset = -1 + (days_before(self.year) + in_year + self.day) as i32;
        let date = table::epoch() + offset;
        trace!(lunar = %self, offset, "resolved solar date");
        Ok(date)
    }

    /// 年干
    pub fn heavenly_stem(&self) -> &'static str {
        fmt::heavenly_stem(self.year)
    }
    /// 年支
    pub fn earthly_branch(&self) -> &'static str {
        fmt::earthly_branch(self.year)
    }
    /// 年名，如「庚寅年」。
    pub fn year_label(&self) -> String {
        fmt::year_name(self.year)
    }
    /// 月名，如「闰六月」。
    pub fn month_label(&self) -> String {
        fmt::month(self.month)
    }
    /// 日名，如「初一」。
    pub fn day_label(&self) -> String {
        fmt::day(self.day)
    }
    /// 中文形式，如「庚寅年 正月初一」。
    pub fn chinese(&self) -> String {
        format!(
            "{} {}{}",
            self.year_label(),
            self.month_label(),
            self.day_label()
        )
    }
}

/// 數字形式 `YYYY-MM-DD`，不標閏月。
impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month.num(), self.day)
    }
}

/// 公曆轉農曆。
///
/// 公曆年須在 [`BASE_YEAR`]..=[`MAX_YEAR`]，月在 `0..=12`，日在 `0..=31`，否則回報
/// [`Error::OutOfRange`]；月、日超出實際範圍者順延，見 [`Date::from_gregorian`]。早於曆元
/// （1950 年 2 月 17 日）的日期亦回報錯誤。
///
/// # 用例
///
/// ```
/// use nongli::SolarDate;
/// use nongli::chinese::{solar_to_lunar, LunarDate, Month::*};
///
/// let lunar = solar_to_lunar(SolarDate::new(1950, 2, 17)).unwrap();
/// assert_eq!(LunarDate::new(1950, Common(1), 1), lunar);
/// assert_eq!("庚寅年 正月初一", lunar.chinese());
/// ```
pub fn solar_to_lunar(solar: SolarDate) -> Result<LunarDate> {
    validate_solar(solar)
        .and_then(LunarDate::from_date)
        .inspect_err(|err| debug!(%solar, %err, "solar date rejected"))
}

fn validate_solar(solar: SolarDate) -> Result<Date> {
    check(Field::Year, solar.year.into(), BASE_YEAR.into(), MAX_YEAR.into())?;
    check(Field::Month, solar.month.into(), 0, 12)?;
    check(Field::Day, solar.day.into(), 0, 31)?;
    solar.to_date().ok_or(Error::OutOfRange {
        field: Field::Year,
        value: solar.year.into(),
        min: BASE_YEAR.into(),
        max: MAX_YEAR.into(),
    })
}

/// 農曆轉公曆。
///
/// 農曆年須在 [`BASE_YEAR`]..=[`MAX_YEAR`]，月序號在 `1..=12`，日在 `0..=31`；閏月須為該年
/// 實有之閏月，否則回報 [`Error::OutOfRange`]。
///
/// # 用例
///
/// ```
/// use nongli::SolarDate;
/// use nongli::chinese::{lunar_to_solar, LunarDate, Month::*};
///
/// let solar = lunar_to_solar(&LunarDate::new(2020, Leap(4), 1)).unwrap();
/// assert_eq!(SolarDate::new(2020, 5, 23), solar);
/// ```
pub fn lunar_to_solar(lunar: &LunarDate) -> Result<SolarDate> {
    lunar
        .to_date()
        .map(SolarDate::from)
        .inspect_err(|err| debug!(%lunar, %err, "lunar date rejected"))
}

/// 取得所給公元年的干支序號，1 為甲子，60 為癸亥。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(1984));
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
