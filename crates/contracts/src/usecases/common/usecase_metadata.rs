/// Metadatos de un UseCase para identificación y UI.
pub trait UseCaseMetadata {
    /// Índice del UseCase (por ejemplo "u501")
    fn usecase_index() -> &'static str;

    /// Nombre técnico (por ejemplo "actualizacion_masiva")
    fn usecase_name() -> &'static str;

    /// Nombre visible en la UI
    fn display_name() -> &'static str;

    /// Descripción del UseCase
    fn description() -> &'static str {
        ""
    }

    /// Nombre completo del estilo "u501_actualizacion_masiva"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
