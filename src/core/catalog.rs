use crate::domain::model::VideoInfo;

// Imersão Django 影片目錄，程式執行期間不會改變
const VIDEOS: &[VideoInfo] = &[
    VideoInfo {
        number: 1,
        id: "zLIeu9cPYrY",
        title: "Publique seu sistema Django em menos de 30 minutos",
    },
    VideoInfo {
        number: 2,
        id: "wj4Qj73Mz7I",
        title: "O método para publicar seu sistema Django automaticamente e do jeito certo",
    },
    VideoInfo {
        number: 3,
        id: "DuvzyZcqVLs",
        title: "Criando uma aplicação real em Django",
    },
    VideoInfo {
        number: 4,
        id: "PFcLhw3bucA",
        title: "Como armazenar informações no banco de dados?",
    },
    VideoInfo {
        number: 5,
        id: "HmAAZj4vLOE",
        title: "O jeito mais fácil de listar todos os dados do banco",
    },
    VideoInfo {
        number: 6,
        id: "8HoZbj8j-ZU",
        title: "Alterando os dados no banco de dados",
    },
    VideoInfo {
        number: 7,
        id: "gCQPwv_3w8o",
        title: "Como eu excluo as informações do banco de dados?",
    },
];

/// 依課程編號查詢影片，不存在時回傳 `None`（例如 0 或 8）
pub fn lookup(lesson_number: i64) -> Option<VideoInfo> {
    VIDEOS
        .iter()
        .find(|video| video.number == lesson_number)
        .copied()
}

pub fn catalog() -> &'static [VideoInfo] {
    VIDEOS
}
