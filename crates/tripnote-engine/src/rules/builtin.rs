//! Built-in rule tables.
//!
//! Order matters: lookups take the first rule with a keyword hit, so
//! broad keywords sit below narrow ones. Append new entries at the
//! bottom unless they must shadow an existing keyword.

use super::{ColorKey, IconId, IconRule, SectionHeaderRule};

pub(super) fn icon_rules() -> Vec<IconRule> {
    vec![
        IconRule::new(&["주소", "위치", "찾아가는"], IconId::MapPin, ColorKey::Primary),
        IconRule::new(
            &["영업", "운영", "오픈", "마감", "시간"],
            IconId::Clock,
            ColorKey::Info,
        ),
        IconRule::new(
            &["가격", "요금", "비용", "입장료", "금액"],
            IconId::Wallet,
            ColorKey::Warning,
        ),
        IconRule::new(&["전화", "연락처", "문의"], IconId::Phone, ColorKey::Success),
        IconRule::new(&["교통", "버스", "지하철", "노선"], IconId::Bus, ColorKey::Primary),
        IconRule::new(&["기차", "열차", "ktx"], IconId::Train, ColorKey::Primary),
        IconRule::new(&["예약", "예매", "대기"], IconId::CalendarCheck, ColorKey::Danger),
        IconRule::new(
            &["홈페이지", "웹사이트", "사이트", "링크"],
            IconId::Globe,
            ColorKey::Info,
        ),
        IconRule::new(&["팁", "꿀팁", "참고"], IconId::Lightbulb, ColorKey::Warning),
        IconRule::new(&["주의", "조심", "금지"], IconId::AlertTriangle, ColorKey::Danger),
        IconRule::new(
            &["메뉴", "추천", "시그니처"],
            IconId::UtensilsCrossed,
            ColorKey::Success,
        ),
        IconRule::new(
            &["숙소", "호텔", "체크인", "체크아웃"],
            IconId::BedDouble,
            ColorKey::Primary,
        ),
        IconRule::new(&["날씨", "기온", "우천"], IconId::CloudSun, ColorKey::Info),
        IconRule::new(&["소요", "거리", "도보"], IconId::Route, ColorKey::Muted),
        IconRule::new(&["와이파이", "wifi", "인터넷"], IconId::Wifi, ColorKey::Info),
        IconRule::new(&["주차", "발렛"], IconId::SquareParking, ColorKey::Muted),
        IconRule::new(&["티켓", "입장권", "바우처"], IconId::Ticket, ColorKey::Success),
    ]
}

pub(super) fn header_rules() -> Vec<SectionHeaderRule> {
    vec![
        SectionHeaderRule::new(
            "✅",
            &["체크리스트", "준비물", "챙길"],
            IconId::CheckSquare,
            ColorKey::Success,
        ),
        SectionHeaderRule::new(
            "📅",
            &["일정", "스케줄", "코스", "동선"],
            IconId::CalendarDays,
            ColorKey::Primary,
        ),
        SectionHeaderRule::new(
            "🍽️",
            &["맛집", "음식", "먹거리", "식당", "카페"],
            IconId::UtensilsCrossed,
            ColorKey::Warning,
        ),
        SectionHeaderRule::new("🚌", &["교통", "이동", "환승"], IconId::Bus, ColorKey::Info),
        SectionHeaderRule::new(
            "🏨",
            &["숙소", "호텔", "숙박"],
            IconId::BedDouble,
            ColorKey::Primary,
        ),
        SectionHeaderRule::new(
            "💰",
            &["예산", "비용", "경비"],
            IconId::Wallet,
            ColorKey::Warning,
        ),
        SectionHeaderRule::new(
            "💡",
            &["팁", "꿀팁", "참고", "알아두면"],
            IconId::Lightbulb,
            ColorKey::Info,
        ),
        SectionHeaderRule::new(
            "⚠️",
            &["주의", "주의사항", "안전"],
            IconId::AlertTriangle,
            ColorKey::Danger,
        ),
        SectionHeaderRule::new(
            "🛍️",
            &["쇼핑", "기념품", "면세"],
            IconId::ShoppingBag,
            ColorKey::Success,
        ),
        SectionHeaderRule::new(
            "📍",
            &["명소", "관광", "볼거리", "스팟", "포토"],
            IconId::MapPin,
            ColorKey::Primary,
        ),
        SectionHeaderRule::new(
            "📞",
            &["비상", "연락처", "긴급"],
            IconId::Phone,
            ColorKey::Danger,
        ),
        SectionHeaderRule::new("🎒", &["패킹", "짐싸기"], IconId::Backpack, ColorKey::Success),
    ]
}
