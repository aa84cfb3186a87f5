mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::{SOLAR_EFFECTIVE_TEMPERATURE_K, Temperature};

    #[test]
    fn test_temperature_conversions() {
        let freezing = Temperature::from_celsius(0.0);
        assert_relative_eq!(freezing.to_kelvin(), 273.15);
        assert_relative_eq!(Temperature::from_kelvin(373.15).to_celsius(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_from_solar() {
        let sun = Temperature::solar_effective();
        assert_relative_eq!(sun.to_kelvin(), SOLAR_EFFECTIVE_TEMPERATURE_K);
        assert_eq!(sun.offset_from(sun), 0.0);

        let m_dwarf = Temperature::from_kelvin(3200.0);
        assert_relative_eq!(m_dwarf.offset_from(sun), -2580.0);
        assert_relative_eq!(m_dwarf - sun, -2580.0);

        let f_star = Temperature::from_kelvin(6500.0);
        assert_relative_eq!(f_star - sun, 720.0);
    }
}
