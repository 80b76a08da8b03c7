//! # Book Listing
//!
//! The built-in shelf: book metadata, category tabs, the featured
//! banners on the home screen, and the sample page text the reader
//! displays.

/// Category id shown first in every tab row; matches everything.
pub const CATEGORY_ALL: &str = "همه";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub total_pages: usize,
}

static BOOKS: [Book; 5] = [
    Book {
        title: "تفسیر المیزان",
        author: "علامه طباطبایی",
        category: "تفسیر",
        total_pages: 2500,
    },
    Book {
        title: "تفسیر نمونه",
        author: "آیت‌الله مکارم شیرازی",
        category: "تفسیر",
        total_pages: 1800,
    },
    Book {
        title: "اصول کافی",
        author: "شیخ کلینی",
        category: "حدیث",
        total_pages: 1200,
    },
    Book {
        title: "نهج البلاغه",
        author: "سید رضی",
        category: "حدیث",
        total_pages: 900,
    },
    Book {
        title: "معراج السعاده",
        author: "ملا احمد نراقی",
        category: "اخلاق",
        total_pages: 760,
    },
];

pub fn books() -> &'static [Book] {
    &BOOKS
}

/// Distinct categories in shelf order, prefixed with the all tab.
pub fn categories() -> Vec<&'static str> {
    let mut cats = vec![CATEGORY_ALL];
    for book in &BOOKS {
        if !cats.contains(&book.category) {
            cats.push(book.category);
        }
    }
    cats
}

/// Books visible under a category tab.
pub fn books_in_category(category: &str) -> Vec<&'static Book> {
    BOOKS
        .iter()
        .filter(|b| category == CATEGORY_ALL || b.category == category)
        .collect()
}

/// Banner texts rotated by the home slideshow.
pub const FEATURED: &[&str] = &[
    "تازه‌های کتابخانه: تفسیر المیزان با حاشیه‌نویسی جدید",
    "استخاره آنلاین با قرآن کریم — همین حالا امتحان کنید",
    "گفتگو با دستیار مطالعه: تفسیر، احادیث و احکام",
];

const SAMPLE_PASSAGE: &str = "تدبر در قرآن کریم راهی است به سوی هدایت. \
خواننده‌ای که با برهان و اندیشه به سراغ متن می‌رود، در هر آیه نکته‌ای \
تازه می‌یابد و فهم او از معارف دین عمیق‌تر می‌شود. این صفحه بخشی از \
متن کتاب را برای مطالعه نمایش می‌دهد.";

/// Text shown for a page of a book. The shelf ships a single sample
/// passage per page; the page header carries the position.
pub fn page_text(book: &Book, page: usize) -> String {
    format!(
        "{} — صفحه {} از {}\n\n{}",
        book.title, page, book.total_pages, SAMPLE_PASSAGE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_is_nonempty() {
        assert!(!books().is_empty());
    }

    #[test]
    fn test_categories_start_with_all() {
        let cats = categories();
        assert_eq!(cats[0], CATEGORY_ALL);
        assert!(cats.contains(&"تفسیر"));
        assert!(cats.contains(&"حدیث"));
        assert!(cats.contains(&"اخلاق"));
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(books_in_category(CATEGORY_ALL).len(), books().len());

        let tafsir = books_in_category("تفسیر");
        assert_eq!(tafsir.len(), 2);
        assert!(tafsir.iter().all(|b| b.category == "تفسیر"));
    }

    #[test]
    fn test_page_text_carries_position() {
        let book = &books()[0];
        let text = page_text(book, 12);
        assert!(text.contains(book.title));
        assert!(text.contains("12"));
    }
}
