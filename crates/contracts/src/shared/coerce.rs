//! Приведение значений из полей формы к числам.
//!
//! Поле, которое не удалось разобрать, дает ноль. Ошибки не возвращаются.

/// Целое из начала строки: `"12abc"` → 12, `"abc"` → 0, `" -3"` → -3
pub fn parse_int_or_zero(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 0;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Десятичное число из начала строки: `"3.49 USD"` → 3.49, `""` → 0
pub fn parse_decimal_or_zero(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    // Экспонента учитывается только если после нее есть цифры
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Отрицательный остаток приводится к нулю
pub fn clamp_stock(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Количество из поля ввода: разбор, затем ограничение снизу нулем
pub fn parse_stock_input(raw: &str) -> u32 {
    clamp_stock(parse_int_or_zero(raw))
}
