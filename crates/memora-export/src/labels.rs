//! Portuguese display names for record enums.

use memora_core::models::appointment::AppointmentStatus;
use memora_core::models::assessment::{
    ConsciousnessLevel, Coordination, Gait, PupilResponse,
};
use memora_core::models::health::{ActivityKind, Importance};
use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::EmotionKind;
use memora_core::models::treatment::TherapyKind;

pub fn consciousness(level: ConsciousnessLevel) -> &'static str {
    match level {
        ConsciousnessLevel::Alert => "Alerta",
        ConsciousnessLevel::Drowsy => "Sonolento",
        ConsciousnessLevel::Stuporous => "Estuporoso",
        ConsciousnessLevel::Comatose => "Comatoso",
    }
}

pub fn pupil_response(response: PupilResponse) -> &'static str {
    match response {
        PupilResponse::Normal => "Normal",
        PupilResponse::Abnormal => "Alterada",
        PupilResponse::Fixed => "Fixa",
    }
}

pub fn coordination(coordination: Coordination) -> &'static str {
    match coordination {
        Coordination::Normal => "Normal",
        Coordination::Impaired => "Alterada",
    }
}

pub fn gait(gait: Gait) -> &'static str {
    match gait {
        Gait::Normal => "Normal",
        Gait::Ataxic => "Atáxica",
        Gait::Spastic => "Espástica",
        Gait::Unable => "Incapaz de deambular",
    }
}

pub fn therapy(kind: TherapyKind) -> &'static str {
    match kind {
        TherapyKind::Physical => "Fisioterapia",
        TherapyKind::Occupational => "Terapia ocupacional",
        TherapyKind::Speech => "Terapia da fala",
        TherapyKind::Cognitive => "Estimulação cognitiva",
    }
}

pub fn appointment_status(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "Agendada",
        AppointmentStatus::Completed => "Realizada",
        AppointmentStatus::Cancelled => "Cancelada",
    }
}

pub fn activity(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Hygiene => "Higiene",
        ActivityKind::Meal => "Refeição",
        ActivityKind::Exercise => "Exercício",
        ActivityKind::Social => "Social",
        ActivityKind::Cognitive => "Cognitiva",
    }
}

pub fn importance(importance: Importance) -> &'static str {
    match importance {
        Importance::Low => "Baixa",
        Importance::Medium => "Média",
        Importance::High => "Alta",
    }
}

pub fn completion(completed: bool) -> &'static str {
    if completed { "Concluída" } else { "Pendente" }
}

pub fn risk(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Baixo",
        RiskLevel::Moderate => "Moderado",
        RiskLevel::High => "Alto",
    }
}

pub fn emotion(kind: EmotionKind) -> &'static str {
    match kind {
        EmotionKind::Positive => "Positivo",
        EmotionKind::Negative => "Negativo",
        EmotionKind::Neutral => "Neutro",
        EmotionKind::Confused => "Confuso",
        EmotionKind::Fatigued => "Cansado",
    }
}
