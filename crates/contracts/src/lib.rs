//! Контракты данных каталога: агрегаты пяти ресурсов, общие блоки
//! (аудит, флаги) и закрытые перечисления протокола.

pub mod domain;
pub mod enums;
