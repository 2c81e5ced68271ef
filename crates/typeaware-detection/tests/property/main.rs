mod detection_properties;
