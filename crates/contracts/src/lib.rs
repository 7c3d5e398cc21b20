//! Типы, общие для frontend и backend.
//!
//! Сейчас здесь только контракт формы обратной связи: DTO запроса/ответа,
//! коды ошибок и правила валидации полей.

pub mod contact;
