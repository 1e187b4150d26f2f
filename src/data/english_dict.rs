//! src/data/english_dict.rs — IT-domain English dictionary.
//!
//! Looked up case-insensitively (callers lowercase first). Multi-word
//! phrases are matched longest-first, before the single-word table.
//! Anything missing here falls through to the deterministic
//! letter-level transliteration in [`crate::normalizers::english`].

use phf::{Map, phf_map};

/// Multi-word phrases, tried before single-word lookup.
pub static PHRASES: Map<&'static str, &'static str> = phf_map! {
    "pull request" => "пул реквест",
    "merge request" => "мерж реквест",
    "code review" => "код ревью",
    "machine learning" => "машинное обучение",
    "load balancer" => "балансировщик нагрузки",
    "hello world" => "хеллоу ворлд",
};

/// Single-word IT-domain terms.
pub static WORDS: Map<&'static str, &'static str> = phf_map! {
    "get" => "гет",
    "post" => "пост",
    "put" => "пут",
    "patch" => "патч",
    "delete" => "делит",
    "user" => "юзер",
    "data" => "дата",
    "server" => "сервер",
    "client" => "клиент",
    "request" => "реквест",
    "response" => "респонс",
    "database" => "дейтабейс",
    "backend" => "бэкенд",
    "frontend" => "фронтенд",
    "framework" => "фреймворк",
    "library" => "лайбрари",
    "function" => "функция",
    "method" => "метод",
    "class" => "класс",
    "object" => "объект",
    "array" => "массив",
    "string" => "стринг",
    "number" => "намбер",
    "boolean" => "булиан",
    "null" => "налл",
    "undefined" => "андефайнд",
    "variable" => "переменная",
    "constant" => "константа",
    "loop" => "луп",
    "condition" => "кондишен",
    "callback" => "колбэк",
    "promise" => "промис",
    "async" => "асинк",
    "await" => "эвейт",
    "thread" => "тред",
    "process" => "процесс",
    "queue" => "кью",
    "stack" => "стек",
    "buffer" => "буфер",
    "stream" => "стрим",
    "socket" => "сокет",
    "token" => "токен",
    "session" => "сессия",
    "cookie" => "куки",
    "cache" => "кэш",
    "config" => "конфиг",
    "deploy" => "деплой",
    "build" => "билд",
    "commit" => "коммит",
    "branch" => "бранч",
    "merge" => "мерж",
    "repository" => "репозиторий",
    "pipeline" => "пайплайн",
    "container" => "контейнер",
    "cluster" => "кластер",
    "node" => "нода",
    "pod" => "под",
    "service" => "сервис",
    "endpoint" => "эндпоинт",
    "middleware" => "миддлвар",
    "router" => "роутер",
    "handler" => "хендлер",
    "parser" => "парсер",
    "compiler" => "компилятор",
    "debugger" => "дебаггер",
    "test" => "тест",
    "mock" => "мок",
    "stub" => "стаб",
    "fixture" => "фикстура",
    "log" => "лог",
    "logger" => "логгер",
    "error" => "эррор",
    "exception" => "исключение",
    "warning" => "ворнинг",
    "bug" => "баг",
    "feature" => "фича",
    "release" => "релиз",
    "version" => "версия",
    "update" => "апдейт",
    "upgrade" => "апгрейд",
    "downgrade" => "даунгрейд",
    "install" => "инсталл",
    "package" => "пакедж",
    "module" => "модуль",
    "import" => "импорт",
    "export" => "экспорт",
    "namespace" => "неймспейс",
    "interface" => "интерфейс",
    "abstract" => "абстрактный",
    "static" => "статик",
    "public" => "паблик",
    "private" => "прайват",
    "protected" => "протектед",
    "override" => "оверрайд",
    "inherit" => "инхерит",
    "instance" => "инстанс",
    "singleton" => "синглтон",
    "factory" => "фабрика",
    "builder" => "билдер",
    "adapter" => "адаптер",
    "wrapper" => "рэппер",
    "decorator" => "декоратор",
    "proxy" => "прокси",
    "gateway" => "гейтвей",
    "firewall" => "файрвол",
    "switch" => "свитч",
    "host" => "хост",
    "domain" => "домен",
    "port" => "порт",
    "protocol" => "протокол",
    "header" => "хедер",
    "payload" => "пейлоад",
    "body" => "боди",
    "schema" => "схема",
    "validation" => "валидация",
    "sanitize" => "санитайз",
    "encode" => "энкод",
    "decode" => "декод",
    "encrypt" => "энкрипт",
    "decrypt" => "декрипт",
    "hash" => "хэш",
    "salt" => "соль",
    "auth" => "авторизация",
    "login" => "логин",
    "logout" => "логаут",
    "signup" => "сайнап",
    "dashboard" => "дашборд",
    "widget" => "виджет",
    "button" => "кнопка",
    "form" => "форма",
    "input" => "инпут",
    "output" => "аутпут",
    "click" => "клик",
    "event" => "ивент",
    "listener" => "листенер",
    "trigger" => "триггер",
    "hook" => "хук",
    "plugin" => "плагин",
    "extension" => "экстеншн",
    "template" => "темплейт",
    "layout" => "лейаут",
    "theme" => "тема",
    "style" => "стиль",
    "animation" => "анимация",
    "transition" => "транзишн",
    "performance" => "перформанс",
    "optimization" => "оптимизация",
    "memory" => "память",
    "storage" => "сторидж",
    "backup" => "бэкап",
    "restore" => "рестор",
    "rollback" => "роллбэк",
    "sprint" => "спринт",
    "backlog" => "беклог",
    "ticket" => "тикет",
    "issue" => "исью",
};

/// Digraph exceptions checked greedily, left-to-right, before the
/// single-letter fallback table.
pub static DIGRAPHS: &[(&str, &str)] = &[
    ("th", "з"),
    ("sh", "ш"),
    ("ch", "ч"),
    ("ph", "ф"),
    ("ck", "к"),
];

/// Single-letter fallback transliteration, used when no digraph matches.
pub static LETTER_FALLBACK: Map<char, &'static str> = phf_map! {
    'a' => "а",
    'b' => "б",
    'c' => "к",
    'd' => "д",
    'e' => "е",
    'f' => "ф",
    'g' => "г",
    'h' => "х",
    'i' => "и",
    'j' => "дж",
    'k' => "к",
    'l' => "л",
    'm' => "м",
    'n' => "н",
    'o' => "о",
    'p' => "п",
    'q' => "к",
    'r' => "р",
    's' => "с",
    't' => "т",
    'u' => "у",
    'v' => "в",
    'w' => "в",
    'x' => "кс",
    'y' => "й",
    'z' => "з",
};
