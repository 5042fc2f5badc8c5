use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Etiqueta de generación para cargas que pueden solaparse.
///
/// Cada petición toma un número de secuencia creciente; al llegar la
/// respuesta, sólo la de la generación más reciente puede aplicar su
/// resultado. Una respuesta vieja que llega tarde se descarta en lugar de
/// pisar datos más nuevos.
#[derive(Clone, Default)]
pub struct GeneracionPeticiones {
    actual: Arc<AtomicU64>,
}

impl GeneracionPeticiones {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inicia una petición nueva y devuelve su número de generación.
    pub fn iniciar(&self) -> u64 {
        self.actual.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// ¿Sigue siendo esta la petición más reciente?
    pub fn es_vigente(&self, generacion: u64) -> bool {
        self.actual.load(Ordering::SeqCst) == generacion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_ultima_generacion_es_la_vigente() {
        let generacion = GeneracionPeticiones::new();
        let primera = generacion.iniciar();
        assert!(generacion.es_vigente(primera));

        let segunda = generacion.iniciar();
        assert!(!generacion.es_vigente(primera));
        assert!(generacion.es_vigente(segunda));
    }

    #[test]
    fn una_respuesta_vieja_no_vuelve_a_ser_vigente() {
        let generacion = GeneracionPeticiones::new();
        let vieja = generacion.iniciar();
        let _ = generacion.iniciar();
        let nueva = generacion.iniciar();

        // La respuesta de la primera carga llega después de la tercera.
        assert!(!generacion.es_vigente(vieja));
        assert!(generacion.es_vigente(nueva));
    }

    #[test]
    fn clones_comparten_la_secuencia() {
        let generacion = GeneracionPeticiones::new();
        let clon = generacion.clone();
        let emitida = generacion.iniciar();
        assert!(clon.es_vigente(emitida));
        clon.iniciar();
        assert!(!generacion.es_vigente(emitida));
    }
}
